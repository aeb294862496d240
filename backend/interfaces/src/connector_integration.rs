//! The request-build / response-handle seam implemented per flow.

use common_utils::{
    request::{Method, Request, RequestBuilder, RequestContent},
    CustomResult,
};
use domain_types::{
    errors::ConnectorError, router_data::RouterData, router_response_types::Response,
};
use hyperswitch_masking::Maskable;

use crate::api::ConnectorCommon;

pub trait ConnectorIntegration<Flow, Req, Res>: ConnectorCommon {
    fn get_headers(
        &self,
        req: &RouterData<Flow, Req, Res>,
    ) -> CustomResult<Vec<(String, Maskable<String>)>, ConnectorError>;

    fn get_url(&self, req: &RouterData<Flow, Req, Res>) -> CustomResult<String, ConnectorError>;

    fn get_request_body(
        &self,
        req: &RouterData<Flow, Req, Res>,
    ) -> CustomResult<RequestContent, ConnectorError>;

    fn build_request(
        &self,
        req: &RouterData<Flow, Req, Res>,
    ) -> CustomResult<Request, ConnectorError> {
        Ok(RequestBuilder::new()
            .method(Method::Post)
            .url(&self.get_url(req)?)
            .headers(self.get_headers(req)?)
            .set_body(self.get_request_body(req)?)
            .build())
    }

    /// Interprets the raw reply, filling the router data's response slot with
    /// either the normalized success data or the gateway decline.
    fn handle_response(
        &self,
        data: RouterData<Flow, Req, Res>,
        res: Response,
    ) -> CustomResult<RouterData<Flow, Req, Res>, ConnectorError>;
}
