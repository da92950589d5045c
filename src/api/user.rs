use crate::error::Result;
use crate::models::User;
use crate::query::Query;
use crate::schema::{decode_resource, Resource};
use crate::wanikani::WaniKaniAPIClient;

#[derive(Clone, Copy)]
pub struct UserApi<'a> {
    client: &'a WaniKaniAPIClient,
}

impl<'a> UserApi<'a> {
    pub(crate) fn new(client: &'a WaniKaniAPIClient) -> Self {
        Self { client }
    }

    pub async fn get(self) -> Result<Resource<User>> {
        let body = self.client.get("user", &Query::new()).await?;

        Ok(decode_resource(&body)?)
    }

    pub async fn username(self) -> Result<String> {
        Ok(self.get().await?.data.username)
    }
}
