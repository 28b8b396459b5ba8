#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BloodPressureReading {
    #[prost(string, tag = "1")]
    pub id: ::prost::alloc::string::String,
    #[prost(int32, tag = "2")]
    pub systolic: i32,
    #[prost(int32, tag = "3")]
    pub diastolic: i32,
    #[prost(int32, optional, tag = "4")]
    pub pulse: ::core::option::Option<i32>,
    /// Unix seconds
    #[prost(int64, tag = "5")]
    pub measured_at: i64,
    #[prost(int64, tag = "6")]
    pub created_at: i64,
    #[prost(int64, tag = "7")]
    pub updated_at: i64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateBloodPressureReadingRequest {
    #[prost(int32, tag = "1")]
    pub systolic: i32,
    #[prost(int32, tag = "2")]
    pub diastolic: i32,
    #[prost(int32, optional, tag = "3")]
    pub pulse: ::core::option::Option<i32>,
    #[prost(int64, tag = "4")]
    pub measured_at: i64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateBloodPressureReadingResponse {
    #[prost(message, optional, tag = "1")]
    pub reading: ::core::option::Option<BloodPressureReading>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListBloodPressureReadingsRequest {
    #[prost(uint32, tag = "1")]
    pub page_size: u32,
    #[prost(string, tag = "2")]
    pub page_token: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListBloodPressureReadingsResponse {
    #[prost(message, repeated, tag = "1")]
    pub readings: ::prost::alloc::vec::Vec<BloodPressureReading>,
    #[prost(string, tag = "2")]
    pub next_page_token: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteBloodPressureReadingRequest {
    #[prost(string, tag = "1")]
    pub id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteBloodPressureReadingResponse {}
