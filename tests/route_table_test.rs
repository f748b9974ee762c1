use medical_escort_client::{EscortError, Navigator, Router};

#[test]
fn test_every_menu_entry_resolves_to_itself() {
    let router = Router::new();

    for item in router.menu() {
        let resolved = router.resolve(&item.path).unwrap();
        assert_eq!(resolved.full_path, item.path);
        assert_eq!(resolved.name, item.name);
        assert!(resolved.redirected_from.is_none());
    }
}

#[test]
fn test_every_page_renders_inside_layout() {
    let router = Router::new();

    for path in ["/home", "/users", "/appointments", "/guidance", "/medications"] {
        let resolved = router.resolve(path).unwrap();
        let chain: Vec<_> = resolved.component_chain().iter().map(|p| p.name).collect();
        assert_eq!(chain.len(), 2, "{} should be nested once", path);
        assert_eq!(chain[0], "Layout");
    }
}

#[test]
fn test_titles_match_page_modules() {
    let router = Router::new();
    let expected = [
        ("Home", "首页", "views/Home"),
        ("Users", "用户管理", "views/Users"),
        ("Appointments", "预约挂号", "views/Appointments"),
        ("Guidance", "就医指导", "views/Guidance"),
        ("Medications", "用药指导", "views/Medications"),
    ];

    for (name, title, module) in expected {
        let path = router.resolve_name(name).unwrap();
        let resolved = router.resolve(&path).unwrap();
        assert_eq!(resolved.meta.unwrap().title, title);
        assert_eq!(resolved.route().component.load().module, module);
    }
}

#[test]
fn test_navigation_session() {
    let router = Router::new();
    let mut navigator = Navigator::new(&router);

    assert_eq!(navigator.push("/").unwrap().full_path, "/home");
    navigator.push("/USERS").unwrap();
    navigator.push("/medications?user=8").unwrap();
    assert_eq!(navigator.history_len(), 3);

    assert!(matches!(
        navigator.push("/settings"),
        Err(EscortError::RouteNotFound { .. })
    ));
    assert_eq!(navigator.current().unwrap().full_path, "/medications");
    assert_eq!(navigator.back().unwrap().full_path, "/users");
}
