use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct UpdatesQuery {
    pub page: u32,
    #[serde(rename = "pageSize")]
    pub page_size: u32,
}

#[derive(Debug, Serialize)]
pub struct ChannelsForm<'a> {
    pub channels: &'a str,
}
