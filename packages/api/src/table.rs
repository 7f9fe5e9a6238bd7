//! [`RecordTable`] over the PostgREST endpoint `/rest/v1/<table>`.

use reqwest::RequestBuilder;
use store::{NewRecord, Record, RecordTable, StoreError, StoreResult};

use crate::client::{send, SupabaseClient};
use crate::error::{ApiError, ApiResult};

/// One table of a Supabase project.
#[derive(Clone, Debug)]
pub struct SupabaseTable {
    client: SupabaseClient,
    name: String,
}

impl SupabaseTable {
    pub(crate) fn new(client: SupabaseClient, name: String) -> Self {
        Self { client, name }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn url(&self) -> String {
        self.client.config().rest_url(&self.name)
    }

    fn select_request(&self) -> RequestBuilder {
        self.client.get(&self.url()).query(&[("select", "*")])
    }

    fn insert_request(&self, row: &NewRecord) -> RequestBuilder {
        self.client
            .post(&self.url())
            .header("Prefer", "return=minimal")
            .json(&[row])
    }

    fn update_request(&self, id: i64, row: &NewRecord) -> RequestBuilder {
        self.client
            .patch(&self.url())
            .query(&[id_filter(id)])
            .header("Prefer", "return=minimal")
            .json(row)
    }

    fn delete_request(&self, id: i64) -> RequestBuilder {
        self.client.delete(&self.url()).query(&[id_filter(id)])
    }

    pub async fn fetch_all(&self) -> ApiResult<Vec<Record>> {
        let body = send(self.select_request()).await?.text().await?;
        parse_rows(&body)
    }

    pub async fn insert_row(&self, row: &NewRecord) -> ApiResult<()> {
        send(self.insert_request(row)).await?;
        Ok(())
    }

    pub async fn update_row(&self, id: i64, row: &NewRecord) -> ApiResult<()> {
        send(self.update_request(id, row)).await?;
        Ok(())
    }

    pub async fn delete_row(&self, id: i64) -> ApiResult<()> {
        send(self.delete_request(id)).await?;
        Ok(())
    }
}

/// PostgREST equality filter on the primary key.
fn id_filter(id: i64) -> (&'static str, String) {
    ("id", format!("eq.{id}"))
}

fn parse_rows(body: &str) -> ApiResult<Vec<Record>> {
    Ok(serde_json::from_str(body)?)
}

fn remote(table: &str, e: ApiError) -> StoreError {
    StoreError::Remote(format!("{table}: {e}"))
}

impl RecordTable for SupabaseTable {
    async fn select_all(&self) -> StoreResult<Vec<Record>> {
        self.fetch_all().await.map_err(|e| remote(&self.name, e))
    }

    async fn insert(&self, row: &NewRecord) -> StoreResult<()> {
        self.insert_row(row).await.map_err(|e| remote(&self.name, e))
    }

    async fn update(&self, id: i64, row: &NewRecord) -> StoreResult<()> {
        self.update_row(id, row)
            .await
            .map_err(|e| remote(&self.name, e))
    }

    async fn delete(&self, id: i64) -> StoreResult<()> {
        self.delete_row(id).await.map_err(|e| remote(&self.name, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::{Method, Request};

    fn table() -> SupabaseTable {
        SupabaseClient::new(crate::SupabaseConfig::new("https://abc.supabase.co", "k")).table("UsersInfo1")
    }

    fn ann() -> NewRecord {
        NewRecord {
            name: "Ann".to_string(),
            age: "30".to_string(),
            email: "a@x.com".to_string(),
            logo_path: "logos/p.jpg".to_string(),
        }
    }

    fn header<'a>(request: &'a Request, name: &str) -> Option<&'a str> {
        request.headers().get(name).and_then(|v| v.to_str().ok())
    }

    fn json_body(request: &Request) -> serde_json::Value {
        let bytes = request.body().and_then(|b| b.as_bytes()).unwrap();
        serde_json::from_slice(bytes).unwrap()
    }

    #[test]
    fn test_requests_carry_api_key() {
        let table = table();
        let requests = [
            table.select_request(),
            table.insert_request(&ann()),
            table.update_request(1, &ann()),
            table.delete_request(1),
        ];
        for request in requests {
            let request = request.build().unwrap();
            assert_eq!(header(&request, "apikey"), Some("k"));
            assert_eq!(header(&request, "authorization"), Some("Bearer k"));
        }
    }

    #[test]
    fn test_select_request() {
        let request = table().select_request().build().unwrap();
        assert_eq!(request.method(), Method::GET);
        assert_eq!(
            request.url().as_str(),
            "https://abc.supabase.co/rest/v1/UsersInfo1?select=*"
        );
    }

    #[test]
    fn test_insert_request_posts_array() {
        let request = table().insert_request(&ann()).build().unwrap();

        assert_eq!(request.method(), Method::POST);
        assert_eq!(request.url().as_str(), "https://abc.supabase.co/rest/v1/UsersInfo1");
        assert_eq!(header(&request, "prefer"), Some("return=minimal"));
        assert_eq!(header(&request, "content-type"), Some("application/json"));
        assert_eq!(
            json_body(&request),
            serde_json::json!([{"Name": "Ann", "Age": "30", "Email": "a@x.com", "Logo": "logos/p.jpg"}])
        );
    }

    #[test]
    fn test_update_request_targets_id() {
        let request = table().update_request(7, &ann()).build().unwrap();

        assert_eq!(request.method(), Method::PATCH);
        assert_eq!(
            request.url().as_str(),
            "https://abc.supabase.co/rest/v1/UsersInfo1?id=eq.7"
        );
        assert_eq!(header(&request, "prefer"), Some("return=minimal"));
        // All four fields are sent, not only the changed ones
        assert_eq!(
            json_body(&request),
            serde_json::json!({"Name": "Ann", "Age": "30", "Email": "a@x.com", "Logo": "logos/p.jpg"})
        );
    }

    #[test]
    fn test_delete_request_targets_id() {
        let request = table().delete_request(7).build().unwrap();

        assert_eq!(request.method(), Method::DELETE);
        assert_eq!(
            request.url().as_str(),
            "https://abc.supabase.co/rest/v1/UsersInfo1?id=eq.7"
        );
        assert!(request.body().is_none());
    }

    #[test]
    fn test_parse_rows_with_remote_columns() {
        let body = r#"[
            {"id": 1, "created_at": "2024-05-01T10:00:00Z", "Name": "Ann", "Age": "30", "Email": "a@x.com", "Logo": "logos/p.jpg"},
            {"id": 2, "Name": "Bob", "Age": null, "Email": "b@x.com", "Logo": null}
        ]"#;

        let rows = parse_rows(body).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "Ann");
        assert_eq!(rows[0].age, "30");
        assert_eq!(rows[0].logo_path, "logos/p.jpg");
        assert_eq!(rows[1].age, "");
        assert_eq!(rows[1].logo_path, "");
    }

    #[test]
    fn test_parse_rows_rejects_garbage() {
        assert!(matches!(parse_rows("{\"message\":1}"), Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_new_record_uses_remote_columns() {
        let row = NewRecord {
            name: "Ann".to_string(),
            age: "30".to_string(),
            email: "a@x.com".to_string(),
            logo_path: "logos/p.jpg".to_string(),
        };

        let json = serde_json::to_value([&row]).unwrap();

        assert_eq!(
            json,
            serde_json::json!([{"Name": "Ann", "Age": "30", "Email": "a@x.com", "Logo": "logos/p.jpg"}])
        );
    }

    #[test]
    fn test_id_filter() {
        assert_eq!(id_filter(42), ("id", "eq.42".to_string()));
    }

    #[test]
    fn test_table_url() {
        let client = SupabaseClient::new(crate::SupabaseConfig::new("https://abc.supabase.co", "k"));
        let table = client.table("UsersInfo1");
        assert_eq!(table.name(), "UsersInfo1");
        assert_eq!(table.url(), "https://abc.supabase.co/rest/v1/UsersInfo1");
    }
}
