//! PokeAPI 客户端

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use super::error::{FetchError, FetchResult};
use crate::model::domain::{Pokemon, PokemonPage, PokemonSummary};

/// PokeAPI 基地址
const API_BASE: &str = "https://pokeapi.co/api/v2/pokemon";

/// 固定页大小
const PAGE_SIZE: usize = 20;

/// 单次请求超时
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// 远端目录服务接口
///
/// 抽出 trait 以便在测试里用 mock 驱动主循环 / Update 层。
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// 按名称抓取单只 Pokemon 详情（名称先归一化为小写）
    async fn fetch_pokemon(&self, name: &str) -> FetchResult<Pokemon>;

    /// 抓取索引的一页，offset = page * 20
    async fn fetch_page(&self, page: usize) -> FetchResult<PokemonPage>;
}

/// 基于 reqwest 的 PokeAPI 客户端
pub struct PokeApiClient {
    client: reqwest::Client,
    base: String,
}

impl PokeApiClient {
    /// 创建客户端（共享连接池，10 秒超时）
    pub fn new() -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            base: API_BASE.to_string(),
        })
    }
}

#[async_trait]
impl CatalogApi for PokeApiClient {
    async fn fetch_pokemon(&self, name: &str) -> FetchResult<Pokemon> {
        let url = pokemon_url(&self.base, name);
        log::debug!("GET {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("GET {url} -> {status}");
            return Err(map_status(status.as_u16()));
        }

        let decoded: PokemonResponse = response
            .json()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))?;

        Ok(decoded.into())
    }

    async fn fetch_page(&self, page: usize) -> FetchResult<PokemonPage> {
        let url = page_url(&self.base, page);
        log::debug!("GET {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("GET {url} -> {status}");
            return Err(map_status(status.as_u16()));
        }

        let decoded: PageResponse = response
            .json()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))?;

        Ok(decoded.into_page(page))
    }
}

/// 详情请求 URL，名称归一化为小写
fn pokemon_url(base: &str, name: &str) -> String {
    format!("{}/{}", base, name.to_lowercase())
}

/// 分页请求 URL，页号 0 对应 offset 0
fn page_url(base: &str, page: usize) -> String {
    let offset = page * PAGE_SIZE;
    format!("{base}?offset={offset}&limit={PAGE_SIZE}")
}

/// 把非成功状态码映射为错误分类
fn map_status(status: u16) -> FetchError {
    match status {
        404 => FetchError::NotFound,
        429 => FetchError::RateLimited,
        other => FetchError::Unexpected(other),
    }
}

// ========== 响应线格式 ==========

/// 详情响应：type/ability 都是带嵌套 name 字段的对象
#[derive(Debug, Deserialize)]
struct PokemonResponse {
    name: String,
    height: u32,
    weight: u32,
    types: Vec<TypeEntry>,
    abilities: Vec<AbilityEntry>,
}

#[derive(Debug, Deserialize)]
struct TypeEntry {
    #[serde(rename = "type")]
    kind: NamedResource,
}

#[derive(Debug, Deserialize)]
struct AbilityEntry {
    ability: NamedResource,
}

#[derive(Debug, Deserialize)]
struct NamedResource {
    name: String,
}

/// 索引页响应（next/previous 等分页提示字段直接忽略）
#[derive(Debug, Deserialize)]
struct PageResponse {
    count: u64,
    results: Vec<NamedResource>,
}

impl From<PokemonResponse> for Pokemon {
    /// 压平嵌套的 type/ability 为扁平字符串序列，保持顺序
    fn from(resp: PokemonResponse) -> Self {
        Pokemon {
            name: resp.name,
            height: resp.height,
            weight: resp.weight,
            types: resp.types.into_iter().map(|t| t.kind.name).collect(),
            abilities: resp.abilities.into_iter().map(|a| a.ability.name).collect(),
        }
    }
}

impl PageResponse {
    fn into_page(self, page: usize) -> PokemonPage {
        PokemonPage {
            page,
            count: self.count,
            entries: self
                .results
                .into_iter()
                .map(|r| PokemonSummary { name: r.name })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pokemon_url_lowercases_name() {
        assert_eq!(
            pokemon_url(API_BASE, "Pikachu"),
            "https://pokeapi.co/api/v2/pokemon/pikachu"
        );
    }

    #[test]
    fn page_url_computes_offset() {
        assert_eq!(
            page_url(API_BASE, 0),
            "https://pokeapi.co/api/v2/pokemon?offset=0&limit=20"
        );
        assert_eq!(
            page_url(API_BASE, 2),
            "https://pokeapi.co/api/v2/pokemon?offset=40&limit=20"
        );
    }

    #[test]
    fn status_mapping() {
        assert_eq!(map_status(404), FetchError::NotFound);
        assert_eq!(map_status(429), FetchError::RateLimited);
        assert_eq!(map_status(503), FetchError::Unexpected(503));
    }

    #[test]
    fn pokemon_response_flattens_nested_names() {
        let raw = r#"{
            "name": "pikachu",
            "height": 4,
            "weight": 60,
            "types": [{"slot": 1, "type": {"name": "electric", "url": ""}}],
            "abilities": [{"ability": {"name": "static", "url": ""}, "is_hidden": false}]
        }"#;

        let decoded: PokemonResponse = serde_json::from_str(raw).unwrap();
        let pokemon: Pokemon = decoded.into();

        assert_eq!(pokemon.name, "pikachu");
        assert_eq!(pokemon.height, 4);
        assert_eq!(pokemon.weight, 60);
        assert_eq!(pokemon.types, vec!["electric".to_string()]);
        assert_eq!(pokemon.abilities, vec!["static".to_string()]);
    }

    #[test]
    fn page_response_keeps_order() {
        let raw = r#"{
            "count": 1302,
            "next": "https://pokeapi.co/api/v2/pokemon?offset=20&limit=20",
            "previous": null,
            "results": [
                {"name": "bulbasaur", "url": ""},
                {"name": "ivysaur", "url": ""}
            ]
        }"#;

        let decoded: PageResponse = serde_json::from_str(raw).unwrap();
        let page = decoded.into_page(0);

        assert_eq!(page.page, 0);
        assert_eq!(page.count, 1302);
        let names: Vec<&str> = page.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["bulbasaur", "ivysaur"]);
    }
}
