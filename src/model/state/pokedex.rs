//! Pokedex 检索/详情页状态

use crate::backend::FetchError;
use crate::model::domain::Pokemon;

/// 查询输入的最大长度
const QUERY_CHAR_LIMIT: usize = 64;

/// Pokedex 页状态
///
/// body 同时承担正常内容与最近一次错误消息的显示，
/// 没有单独的错误标志位。
#[derive(Debug)]
pub struct PokedexState {
    /// 查询输入框内容
    pub input: String,
    /// 显示区标题
    pub header: String,
    /// 显示区正文（详情或错误消息）
    pub body: String,
}

impl PokedexState {
    /// 创建初始状态
    pub fn new() -> Self {
        Self {
            input: String::new(),
            header: "Pokedex".to_string(),
            body: "Search for a pokemon".to_string(),
        }
    }

    /// 向输入框追加字符（超过上限时丢弃）
    pub fn push_char(&mut self, ch: char) {
        if self.input.chars().count() < QUERY_CHAR_LIMIT {
            self.input.push(ch);
        }
    }

    /// 删除输入框末尾字符
    pub fn pop_char(&mut self) {
        self.input.pop();
    }

    /// 取出当前查询并清空输入框
    ///
    /// 查询为空（或全为空白）时返回 `None`，输入框保持不变。
    pub fn take_query(&mut self) -> Option<String> {
        let query = self.input.trim().to_string();
        if query.is_empty() {
            return None;
        }
        self.input.clear();
        Some(query)
    }

    /// 渲染一只 Pokemon 的详情到正文
    pub fn show_pokemon(&mut self, pokemon: &Pokemon) {
        self.body = format!(
            "Name: {}\nHeight: {}\nWeight: {}\nTypes: {}\nAbilities: {}",
            pokemon.name,
            pokemon.height,
            pokemon.weight,
            pokemon.types.join(", "),
            pokemon.abilities.join(", "),
        );
    }

    /// 把错误消息渲染到正文，覆盖之前的内容
    pub fn show_error(&mut self, err: &FetchError) {
        self.body = err.to_string();
    }
}

impl Default for PokedexState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_query_empty_is_none() {
        let mut state = PokedexState::new();
        assert_eq!(state.take_query(), None);

        state.input = "   ".to_string();
        assert_eq!(state.take_query(), None);
    }

    #[test]
    fn take_query_clears_input() {
        let mut state = PokedexState::new();
        state.input = "Pikachu".to_string();

        assert_eq!(state.take_query(), Some("Pikachu".to_string()));
        assert!(state.input.is_empty());
    }

    #[test]
    fn push_char_respects_limit() {
        let mut state = PokedexState::new();
        for _ in 0..100 {
            state.push_char('a');
        }
        assert_eq!(state.input.chars().count(), QUERY_CHAR_LIMIT);
    }

    #[test]
    fn show_pokemon_renders_fixed_format() {
        let mut state = PokedexState::new();
        state.show_pokemon(&Pokemon {
            name: "pikachu".to_string(),
            height: 4,
            weight: 60,
            types: vec!["electric".to_string()],
            abilities: vec!["static".to_string()],
        });

        assert_eq!(
            state.body,
            "Name: pikachu\nHeight: 4\nWeight: 60\nTypes: electric\nAbilities: static"
        );
    }

    #[test]
    fn show_error_replaces_body() {
        let mut state = PokedexState::new();
        state.body = "old content".to_string();

        state.show_error(&FetchError::NotFound);
        assert_eq!(state.body, "pokemon not found");
    }
}
