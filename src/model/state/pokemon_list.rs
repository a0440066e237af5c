//! Pokemon 列表页状态

use crate::model::domain::{PokemonPage, PokemonSummary};

/// Pokemon 列表页状态
///
/// 持有当前驻留页的条目、选中光标、页号与本地过滤串。
/// 翻页抓取进行期间旧页内容保持可见，直到新页到达被整体替换。
#[derive(Debug, Default)]
pub struct PokemonListState {
    /// 当前页条目
    pub entries: Vec<PokemonSummary>,
    /// 选中光标（基于过滤后的可见行）
    pub selected: usize,
    /// 当前页号（从 0 开始）
    pub page: usize,
    /// 远端报告的条目总数
    pub count: u64,
    /// 本地过滤串（不触发网络活动）
    pub filter: String,
    /// 是否正在编辑过滤串
    pub filtering: bool,
}

impl PokemonListState {
    /// 创建初始状态
    pub fn new() -> Self {
        Self::default()
    }

    /// 过滤后的可见条目（大小写不敏感的子串匹配）
    pub fn visible_entries(&self) -> Vec<&PokemonSummary> {
        if self.filter.is_empty() {
            return self.entries.iter().collect();
        }
        let needle = self.filter.to_lowercase();
        self.entries
            .iter()
            .filter(|entry| entry.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// 当前高亮的条目（列表为空时为 `None`）
    pub fn selected_summary(&self) -> Option<&PokemonSummary> {
        self.visible_entries().get(self.selected).copied()
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        let len = self.visible_entries().len();
        if len > 0 && self.selected < len - 1 {
            self.selected += 1;
        }
    }

    /// 选择第一项
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// 选择最后一项
    pub fn select_last(&mut self) {
        let len = self.visible_entries().len();
        if len > 0 {
            self.selected = len - 1;
        }
    }

    /// 翻到上一页
    ///
    /// 页号立即回退并返回要抓取的页号；已在第 0 页时是静默
    /// no-op（不是错误），返回 `None` 表示不安排抓取。
    pub fn page_previous(&mut self) -> Option<usize> {
        if self.page == 0 {
            return None;
        }
        self.page -= 1;
        Some(self.page)
    }

    /// 翻到下一页
    ///
    /// 客户端不限制上界：越过末尾的页由远端返回空页，
    /// 那是合法的非错误状态。返回要抓取的页号。
    pub fn page_next(&mut self) -> usize {
        self.page += 1;
        self.page
    }

    /// 合并一页抓取结果：整体替换条目与页号，
    /// 光标越界时重置到第一项
    pub fn on_page_loaded(&mut self, page: PokemonPage) {
        self.entries = page.entries;
        self.page = page.page;
        self.count = page.count;
        if self.selected >= self.visible_entries().len() {
            self.selected = 0;
        }
    }

    /// 向过滤串追加字符
    pub fn push_filter(&mut self, ch: char) {
        self.filter.push(ch);
        self.selected = 0;
    }

    /// 删除过滤串末尾字符
    pub fn pop_filter(&mut self) {
        self.filter.pop();
        self.selected = 0;
    }
}
