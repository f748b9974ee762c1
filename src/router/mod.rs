//! 前端頁面路由表與路徑解析。

pub mod navigator;
pub mod table;

pub use navigator::Navigator;
pub use table::{route_table, Component, LazyPage, Page, Route, RouteMeta};

use crate::utils::error::{EscortError, Result};
use serde::Serialize;

const MAX_REDIRECTS: usize = 10;

/// 解析結果：從外殼到頁面的路由鏈
#[derive(Debug)]
pub struct ResolvedRoute<'r> {
    pub full_path: String,
    pub name: Option<&'static str>,
    pub meta: Option<RouteMeta>,
    pub matched: Vec<&'r Route>,
    pub redirected_from: Option<String>,
}

impl<'r> ResolvedRoute<'r> {
    /// 最內層（實際顯示的）路由
    pub fn route(&self) -> &'r Route {
        self.matched[self.matched.len() - 1]
    }

    /// 外殼名稱鏈，例如 `["Layout", "Users"]`
    pub fn component_chain(&self) -> Vec<&'r Page> {
        self.matched.iter().map(|r| r.component.load()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub path: String,
    pub name: Option<&'static str>,
    pub title: &'static str,
    pub icon: &'static str,
}

#[derive(Debug)]
pub struct Router {
    routes: Vec<Route>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    pub fn new() -> Self {
        Self::with_routes(route_table())
    }

    pub fn with_routes(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// 解析路徑並跟隨重新導向。查詢字串與 hash 會被忽略，
    /// 比對不分大小寫，結尾斜線可有可無。
    pub fn resolve(&self, path: &str) -> Result<ResolvedRoute<'_>> {
        let requested = normalize(path);
        let mut current = requested.clone();
        let mut visited: Vec<String> = Vec::new();

        loop {
            let mut chain = Vec::new();
            let full_path = walk(&self.routes, "", &current, &mut chain).ok_or_else(|| {
                EscortError::RouteNotFound {
                    path: path.to_string(),
                }
            })?;
            let route = chain[chain.len() - 1];

            match route.redirect {
                Some(target) => {
                    visited.push(full_path);
                    let next = normalize(target);
                    if visited.len() > MAX_REDIRECTS
                        || visited.iter().any(|v| v.eq_ignore_ascii_case(&next))
                    {
                        return Err(EscortError::RedirectLoop {
                            path: path.to_string(),
                        });
                    }
                    tracing::debug!("↪️ Redirecting {} to {}", current, next);
                    current = next;
                }
                None => {
                    return Ok(ResolvedRoute {
                        full_path,
                        name: route.name,
                        meta: route.meta,
                        matched: chain,
                        redirected_from: if visited.is_empty() {
                            None
                        } else {
                            Some(requested)
                        },
                    });
                }
            }
        }
    }

    /// 具名導覽：回傳路由的完整路徑
    pub fn resolve_name(&self, name: &str) -> Result<String> {
        fn find(routes: &[Route], parent: &str, name: &str) -> Option<String> {
            routes.iter().find_map(|route| {
                let full = join(parent, route.path);
                if route.name == Some(name) {
                    Some(full)
                } else {
                    find(&route.children, &full, name)
                }
            })
        }

        find(&self.routes, "", name).ok_or_else(|| EscortError::UnknownRouteName {
            name: name.to_string(),
        })
    }

    /// 側邊選單：所有帶 meta 的路由，依宣告順序
    pub fn menu(&self) -> Vec<MenuItem> {
        fn collect(routes: &[Route], parent: &str, items: &mut Vec<MenuItem>) {
            for route in routes {
                let full = join(parent, route.path);
                if let Some(meta) = route.meta {
                    items.push(MenuItem {
                        path: full.clone(),
                        name: route.name,
                        title: meta.title,
                        icon: meta.icon,
                    });
                }
                collect(&route.children, &full, items);
            }
        }

        let mut items = Vec::new();
        collect(&self.routes, "", &mut items);
        items
    }
}

fn walk<'r>(routes: &'r [Route], parent: &str, path: &str, chain: &mut Vec<&'r Route>) -> Option<String> {
    for route in routes {
        let full = join(parent, route.path);
        chain.push(route);
        if full.eq_ignore_ascii_case(path) {
            return Some(full);
        }
        if let Some(found) = walk(&route.children, &full, path, chain) {
            return Some(found);
        }
        chain.pop();
    }
    None
}

fn join(parent: &str, child: &str) -> String {
    if child.starts_with('/') || parent.is_empty() {
        normalize(child)
    } else if parent.ends_with('/') {
        format!("{}{}", parent, child)
    } else {
        format!("{}/{}", parent, child)
    }
}

fn normalize(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or_default().trim();
    let mut normalized = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    };
    while normalized.len() > 1 && normalized.ends_with('/') {
        normalized.pop();
    }
    normalized
}
