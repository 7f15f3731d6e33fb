mod api_client;
mod field_normalizer;
