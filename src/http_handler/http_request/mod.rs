use super::http_response::{aircraft, auth, configuration, response_common, routes};

pub mod aircraft_filter_get;
pub mod aircraft_get;
pub mod aircraft_list_get;
pub mod aircraft_recommend_get;
pub mod config_optimize_post;
pub mod config_recommend_get;
pub mod login_post;
pub mod logout_post;
pub mod register_post;
pub mod request_common;
pub mod route_create_post;
pub mod route_delete_delete;
pub mod route_get;
pub mod route_list_get;
pub mod route_recommend_get;
pub mod route_update_put;
pub mod user_get;
