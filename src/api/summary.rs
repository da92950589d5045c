use crate::error::Result;
use crate::models::Summary;
use crate::query::Query;
use crate::schema::{decode_resource, Resource};
use crate::wanikani::WaniKaniAPIClient;

#[derive(Clone, Copy)]
pub struct SummaryApi<'a> {
    client: &'a WaniKaniAPIClient,
}

impl<'a> SummaryApi<'a> {
    pub(crate) fn new(client: &'a WaniKaniAPIClient) -> Self {
        Self { client }
    }

    pub async fn get(self) -> Result<Resource<Summary>> {
        let body = self.client.get("summary", &Query::new()).await?;

        Ok(decode_resource(&body)?)
    }
}
