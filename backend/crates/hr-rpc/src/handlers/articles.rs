use crate::handlers::parse_id;
use crate::response_builder::article_to_proto;
use crate::{AppState, PageRequest, Proto, RequestContext, Result as RpcErrorResult, RpcError};

use hr_db::ArticleRepository;
use hr_proto::{GetArticleRequest, GetArticleResponse, ListArticlesRequest, ListArticlesResponse};

use axum::extract::State;
use log::debug;

// Articles are public by default, so these handlers never read the caller.

/// Handle ListArticles
pub async fn list_articles(
    State(state): State<AppState>,
    ctx: RequestContext,
    Proto(req): Proto<ListArticlesRequest>,
) -> RpcErrorResult<Proto<ListArticlesResponse>> {
    debug!("{} ListArticles starting", ctx.log_prefix());

    let page = PageRequest::parse(req.page_size, &req.page_token)?;

    let rows = ArticleRepository::new(state.pool.clone())
        .list(page.offset, page.fetch_limit())
        .await?;
    let (articles, next_page_token) = page.finish(rows);

    Ok(Proto(ListArticlesResponse {
        articles: articles.iter().map(article_to_proto).collect(),
        next_page_token,
    }))
}

/// Handle GetArticle
pub async fn get_article(
    State(state): State<AppState>,
    ctx: RequestContext,
    Proto(req): Proto<GetArticleRequest>,
) -> RpcErrorResult<Proto<GetArticleResponse>> {
    debug!("{} GetArticle starting", ctx.log_prefix());

    let id = parse_id("id", &req.id)?;

    let article = ArticleRepository::new(state.pool.clone())
        .find_by_id(id)
        .await?
        .ok_or_else(|| RpcError::not_found(format!("article {id} not found")))?;

    Ok(Proto(GetArticleResponse {
        article: Some(article_to_proto(&article)),
    }))
}
