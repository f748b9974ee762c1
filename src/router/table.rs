use serde::Serialize;
use std::sync::OnceLock;

/// 頁面元件描述
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Page {
    pub name: &'static str,
    pub module: &'static str,
}

impl Page {
    pub const fn new(name: &'static str, module: &'static str) -> Self {
        Self { name, module }
    }
}

/// 第一次導覽到時才載入的頁面，載入結果會被記住
pub struct LazyPage {
    loader: fn() -> Page,
    loaded: OnceLock<Page>,
}

impl LazyPage {
    pub const fn new(loader: fn() -> Page) -> Self {
        Self {
            loader,
            loaded: OnceLock::new(),
        }
    }

    pub fn load(&self) -> &Page {
        self.loaded.get_or_init(|| {
            let page = (self.loader)();
            tracing::debug!("📦 Loaded page component {}", page.module);
            page
        })
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded.get().is_some()
    }
}

impl std::fmt::Debug for LazyPage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LazyPage")
            .field("loaded", &self.loaded.get())
            .finish()
    }
}

#[derive(Debug)]
pub enum Component {
    Eager(Page),
    Lazy(LazyPage),
}

impl Component {
    pub fn load(&self) -> &Page {
        match self {
            Component::Eager(page) => page,
            Component::Lazy(lazy) => lazy.load(),
        }
    }

    pub fn is_loaded(&self) -> bool {
        match self {
            Component::Eager(_) => true,
            Component::Lazy(lazy) => lazy.is_loaded(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RouteMeta {
    pub title: &'static str,
    pub icon: &'static str,
}

#[derive(Debug)]
pub struct Route {
    /// 根路由以 `/` 開頭，子路由是相對片段
    pub path: &'static str,
    pub name: Option<&'static str>,
    pub component: Component,
    pub redirect: Option<&'static str>,
    pub meta: Option<RouteMeta>,
    pub children: Vec<Route>,
}

impl Route {
    fn page(
        path: &'static str,
        name: &'static str,
        loader: fn() -> Page,
        title: &'static str,
        icon: &'static str,
    ) -> Self {
        Self {
            path,
            name: Some(name),
            component: Component::Lazy(LazyPage::new(loader)),
            redirect: None,
            meta: Some(RouteMeta { title, icon }),
            children: Vec::new(),
        }
    }
}

pub const LAYOUT: Page = Page::new("Layout", "components/Layout");

/// 應用程式的路由表：Layout 外殼底下五個頁面
pub fn route_table() -> Vec<Route> {
    vec![Route {
        path: "/",
        name: None,
        component: Component::Eager(LAYOUT),
        redirect: Some("/home"),
        meta: None,
        children: vec![
            Route::page("home", "Home", || Page::new("Home", "views/Home"), "首页", "House"),
            Route::page("users", "Users", || Page::new("Users", "views/Users"), "用户管理", "User"),
            Route::page(
                "appointments",
                "Appointments",
                || Page::new("Appointments", "views/Appointments"),
                "预约挂号",
                "Calendar",
            ),
            Route::page(
                "guidance",
                "Guidance",
                || Page::new("Guidance", "views/Guidance"),
                "就医指导",
                "Guide",
            ),
            Route::page(
                "medications",
                "Medications",
                || Page::new("Medications", "views/Medications"),
                "用药指导",
                "Medicine",
            ),
        ],
    }]
}
