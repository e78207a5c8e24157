use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use http::Method;

use grouter::{jsonify, App, Context, Error, Group, Request, Response, ScopedContext, GroupInfo, GROUP_CTX_KEY};

mod tracing_util;
use tracing_util::TestTracing;

/// The demo application from which the dispatch contract is drawn: an
/// index group at the root, `/python` and `/java` groups with typed routes.
fn demo_app() -> App {
    let mut idx = Group::new("");
    idx.route("^/?$", &[], |_| Response::html("<h1>index</h1>")).unwrap();

    let mut py = Group::new("/python");
    py.route("^/?$", &[Method::GET], |_| {
        Response::data(serde_json::json!({ "tom": 20, "jerry": 16 }))
    })
    .unwrap()
    .route("/{people_name:any}/{user_id:int}", &[], |req| {
        Response::html(format!(
            "<h1>people: {}, user_id: {}</h1>",
            req.vars().str("people_name").unwrap_or(""),
            req.vars().int("user_id").unwrap_or(0),
        ))
    })
    .unwrap();

    let mut ja = Group::new("/java");
    ja.route("/{app:word}/{version:float}/download", &[], |req| {
        Response::ok(format!(
            "{} {}",
            req.vars().str("app").unwrap_or(""),
            req.vars().float("version").unwrap_or(0.0),
        ))
    })
    .unwrap();

    let mut app = App::new();
    app.register_group(idx)
        .register_group(py)
        .register_group(ja);
    app
}

#[test]
fn test_end_to_end_typed_vars() {
    let _tracing = TestTracing::init();
    let app = demo_app();

    let res = app
        .handle(Request::new(Method::GET, "/python/tom/20"))
        .unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(
        res.body().as_text(),
        Some("<h1>people: tom, user_id: 20</h1>")
    );
}

#[test]
fn test_end_to_end_float_route() {
    let app = demo_app();
    let res = app
        .handle(Request::new(Method::GET, "/java/maven/3.9/download"))
        .unwrap();
    assert_eq!(res.body().as_text(), Some("maven 3.9"));

    // float demands a fractional part; "/java/maven/3/download" misses
    // every route and the index root pattern, terminating in NotFound.
    let err = app
        .handle(Request::new(Method::GET, "/java/maven/3/download"))
        .unwrap_err();
    assert!(matches!(err, Error::NotFound { .. }));
}

#[test]
fn test_group_registration_order_selects_first_response() {
    // Index group is registered first with a catch-all prefix, but its only
    // route is the bare root; "/python" still reaches the python group.
    let app = demo_app();
    let res = app.handle(Request::new(Method::GET, "/")).unwrap();
    assert_eq!(res.body().as_text(), Some("<h1>index</h1>"));

    let res = app.handle(Request::new(Method::GET, "/python")).unwrap();
    assert!(res.body().as_data().is_some());
}

#[test]
fn test_not_found_terminal() {
    let app = demo_app();
    let err = app
        .handle(Request::new(Method::GET, "/ruby/anything"))
        .unwrap_err();
    match err {
        Error::NotFound { path } => assert_eq!(path, "/ruby/anything"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn test_respond_maps_errors_at_the_boundary() {
    let app = demo_app();

    let res = app.respond(Request::new(Method::GET, "/ruby/anything"));
    assert_eq!(res.status(), 404);

    // i64 overflow on the int token is a cast failure -> generic 500.
    let res = app.respond(Request::new(
        Method::GET,
        "/python/tom/99999999999999999999999",
    ));
    assert_eq!(res.status(), 500);
}

#[test]
fn test_interceptor_scoping_and_order() {
    let order: Arc<Mutex<Vec<&'static str>>> = Arc::new(Mutex::new(Vec::new()));

    let mut py = Group::new("/python");
    py.route("/{name:word}", &[], |_| Response::ok("ok")).unwrap();
    {
        let order = Arc::clone(&order);
        py.pre_interceptor(move |_: &ScopedContext, req: Request| {
            order.lock().unwrap().push("group-pre");
            req
        });
    }
    {
        let order = Arc::clone(&order);
        py.post_interceptor(move |_: &ScopedContext, _: &Request, res: Response| {
            order.lock().unwrap().push("group-post");
            res
        });
    }

    let mut app = App::new();
    app.register_group(py);
    {
        let order = Arc::clone(&order);
        app.pre_interceptor(move |_: &Context, req: Request| {
            order.lock().unwrap().push("global-pre");
            req
        });
    }
    {
        let order = Arc::clone(&order);
        app.post_interceptor(move |_: &Context, _: &Request, res: Response| {
            order.lock().unwrap().push("global-post");
            res
        });
    }

    app.handle(Request::new(Method::GET, "/python/tom")).unwrap();
    assert_eq!(
        *order.lock().unwrap(),
        vec!["global-pre", "group-pre", "group-post", "global-post"]
    );
}

#[test]
fn test_global_post_skipped_on_total_no_match() {
    let post_runs = Arc::new(AtomicUsize::new(0));

    let mut app = App::new();
    app.register_group(Group::new("/python"));
    {
        let post_runs = Arc::clone(&post_runs);
        app.post_interceptor(move |_: &Context, _: &Request, res: Response| {
            post_runs.fetch_add(1, Ordering::SeqCst);
            res
        });
    }

    let err = app.handle(Request::new(Method::GET, "/java/x")).unwrap_err();
    assert!(matches!(err, Error::NotFound { .. }));
    assert_eq!(post_runs.load(Ordering::SeqCst), 0);
}

#[test]
fn test_global_pre_interceptor_rewrites_request() {
    let mut py = Group::new("/python");
    py.route("/{name:word}", &[], |req| {
        Response::ok(req.vars().str("name").unwrap_or("").to_string())
    })
    .unwrap();

    let mut app = App::new();
    app.register_group(py);
    app.pre_interceptor(|_: &Context, mut req: Request| {
        req.set_path("/python/rewritten");
        req
    });

    let res = app.handle(Request::new(Method::GET, "/elsewhere")).unwrap();
    assert_eq!(res.body().as_text(), Some("rewritten"));
}

#[test]
fn test_extension_visible_through_scoped_fallback() {
    let seen = Arc::new(Mutex::new(None::<String>));

    let mut py = Group::new("/python");
    py.route("/{name:word}", &[], |_| Response::ok("ok")).unwrap();
    {
        let seen = Arc::clone(&seen);
        py.pre_interceptor(move |ctx: &ScopedContext, req: Request| {
            // extension registered app-side resolves through the fallback
            if let Some(motd) = ctx.get::<String>("motd") {
                *seen.lock().unwrap() = Some(motd.as_str().to_string());
            }
            req
        });
    }

    let mut app = App::new();
    app.register_group(py);
    app.register_extension("motd", "hello".to_string());

    app.handle(Request::new(Method::GET, "/python/tom")).unwrap();
    assert_eq!(seen.lock().unwrap().as_deref(), Some("hello"));
}

#[test]
fn test_group_info_under_reserved_key() {
    let seen_prefix = Arc::new(Mutex::new(None::<String>));

    let mut py = Group::new("/python");
    py.route("/{name:word}", &[], |_| Response::ok("ok")).unwrap();
    {
        let seen_prefix = Arc::clone(&seen_prefix);
        py.pre_interceptor(move |ctx: &ScopedContext, req: Request| {
            if let Some(info) = ctx.get::<GroupInfo>(GROUP_CTX_KEY) {
                *seen_prefix.lock().unwrap() = Some(info.prefix.clone());
            }
            req
        });
    }

    let mut app = App::new();
    app.register_group(py);

    app.handle(Request::new(Method::GET, "/python/tom")).unwrap();
    assert_eq!(seen_prefix.lock().unwrap().as_deref(), Some("/python"));
}

#[test]
fn test_jsonify_round_trip() {
    let res = jsonify(&serde_json::json!({ "tom": 20 })).unwrap();
    assert_eq!(res.status(), 200);
    assert!(res.content_type().starts_with("application/json"));

    let decoded: serde_json::Value =
        serde_json::from_str(res.body().as_text().unwrap()).unwrap();
    assert_eq!(decoded, serde_json::json!({ "tom": 20 }));
}

#[test]
fn test_with_status_overrides_jsonify_default() {
    let res = jsonify(&serde_json::json!({ "id": 7 }))
        .unwrap()
        .with_status(201);
    assert_eq!(res.status(), 201);
    assert!(res.content_type().starts_with("application/json"));
}

#[test]
fn test_user_agent_reaches_interceptors() {
    let seen = Arc::new(Mutex::new(None::<String>));

    let mut app = App::new();
    let mut idx = Group::new("");
    idx.route("^/?$", &[], |_| Response::ok("ok")).unwrap();
    app.register_group(idx);
    {
        let seen = Arc::clone(&seen);
        app.post_interceptor(move |_: &Context, req: &Request, res: Response| {
            *seen.lock().unwrap() = req.user_agent().map(str::to_string);
            res
        });
    }

    let req = Request::new(Method::GET, "/").header("User-Agent", "curl/8.0");
    app.handle(req).unwrap();
    assert_eq!(seen.lock().unwrap().as_deref(), Some("curl/8.0"));
}
