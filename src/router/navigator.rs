use crate::router::{ResolvedRoute, Router};
use crate::utils::error::Result;

/// 導覽狀態：目前位置與歷史紀錄。導覽時才載入頁面元件。
pub struct Navigator<'r> {
    router: &'r Router,
    history: Vec<ResolvedRoute<'r>>,
}

impl<'r> Navigator<'r> {
    pub fn new(router: &'r Router) -> Self {
        Self {
            router,
            history: Vec::new(),
        }
    }

    /// 導覽到 `path`；與目前位置相同時不新增歷史
    pub fn push(&mut self, path: &str) -> Result<&ResolvedRoute<'r>> {
        let resolved = self.router.resolve(path)?;
        for route in &resolved.matched {
            route.component.load();
        }

        let duplicate = self
            .history
            .last()
            .is_some_and(|current| current.full_path == resolved.full_path);
        if !duplicate {
            tracing::info!("🧭 Navigated to {}", resolved.full_path);
            self.history.push(resolved);
        }

        Ok(&self.history[self.history.len() - 1])
    }

    /// 回到上一頁；只剩一筆時停在原地
    pub fn back(&mut self) -> Option<&ResolvedRoute<'r>> {
        if self.history.len() > 1 {
            self.history.pop();
        }
        self.history.last()
    }

    pub fn current(&self) -> Option<&ResolvedRoute<'r>> {
        self.history.last()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}
