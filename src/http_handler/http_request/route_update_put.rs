use super::request_common::{HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType};
use super::routes::RouteDetailResponse;
use crate::http_handler::http_handler_common::RouteDraft;
use std::borrow::Cow;

#[derive(Debug)]
pub(crate) struct RouteUpdateRequest<'a> {
    pub(crate) id: u64,
    pub(crate) draft: &'a RouteDraft,
}

impl JSONBodyHTTPRequestType for RouteUpdateRequest<'_> {
    type Body = RouteDraft;
    fn body(&self) -> &Self::Body { self.draft }
}

impl HTTPRequestType for RouteUpdateRequest<'_> {
    type Response = RouteDetailResponse;
    fn endpoint(&self) -> Cow<'static, str> { Cow::Owned(format!("/routes/{}", self.id)) }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Put }
}
