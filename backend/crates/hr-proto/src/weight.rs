#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WeightEntry {
    #[prost(string, tag = "1")]
    pub id: ::prost::alloc::string::String,
    #[prost(double, tag = "2")]
    pub weight_kg: f64,
    /// Unix seconds
    #[prost(int64, tag = "3")]
    pub measured_at: i64,
    #[prost(string, optional, tag = "4")]
    pub note: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(int64, tag = "5")]
    pub created_at: i64,
    #[prost(int64, tag = "6")]
    pub updated_at: i64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateWeightEntryRequest {
    #[prost(double, tag = "1")]
    pub weight_kg: f64,
    #[prost(int64, tag = "2")]
    pub measured_at: i64,
    #[prost(string, optional, tag = "3")]
    pub note: ::core::option::Option<::prost::alloc::string::String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateWeightEntryResponse {
    #[prost(message, optional, tag = "1")]
    pub entry: ::core::option::Option<WeightEntry>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetWeightEntryRequest {
    #[prost(string, tag = "1")]
    pub id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetWeightEntryResponse {
    #[prost(message, optional, tag = "1")]
    pub entry: ::core::option::Option<WeightEntry>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListWeightEntriesRequest {
    #[prost(uint32, tag = "1")]
    pub page_size: u32,
    #[prost(string, tag = "2")]
    pub page_token: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListWeightEntriesResponse {
    #[prost(message, repeated, tag = "1")]
    pub entries: ::prost::alloc::vec::Vec<WeightEntry>,
    #[prost(string, tag = "2")]
    pub next_page_token: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteWeightEntryRequest {
    #[prost(string, tag = "1")]
    pub id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteWeightEntryResponse {}
