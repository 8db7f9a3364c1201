pub mod http_vision_client;
