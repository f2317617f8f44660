use super::request_common::{HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType};
use super::routes::RouteDetailResponse;
use crate::http_handler::http_handler_common::RouteDraft;
use std::borrow::Cow;

#[derive(Debug)]
pub(crate) struct RouteCreateRequest<'a> {
    pub(crate) draft: &'a RouteDraft,
}

impl JSONBodyHTTPRequestType for RouteCreateRequest<'_> {
    type Body = RouteDraft;
    fn body(&self) -> &Self::Body { self.draft }
}

impl HTTPRequestType for RouteCreateRequest<'_> {
    type Response = RouteDetailResponse;
    fn endpoint(&self) -> Cow<'static, str> { Cow::Borrowed("/routes/") }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}
