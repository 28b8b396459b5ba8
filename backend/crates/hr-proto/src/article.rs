#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Article {
    #[prost(string, tag = "1")]
    pub id: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub title: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub summary: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub body: ::prost::alloc::string::String,
    /// Unix seconds
    #[prost(int64, tag = "5")]
    pub published_at: i64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListArticlesRequest {
    #[prost(uint32, tag = "1")]
    pub page_size: u32,
    #[prost(string, tag = "2")]
    pub page_token: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListArticlesResponse {
    #[prost(message, repeated, tag = "1")]
    pub articles: ::prost::alloc::vec::Vec<Article>,
    #[prost(string, tag = "2")]
    pub next_page_token: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetArticleRequest {
    #[prost(string, tag = "1")]
    pub id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetArticleResponse {
    #[prost(message, optional, tag = "1")]
    pub article: ::core::option::Option<Article>,
}
