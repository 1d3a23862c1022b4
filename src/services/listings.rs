use anyhow::Result;
use colored::Colorize;
use log::info;
use serde::Serialize;

use crate::api::ListingsClient;
use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::domain::models::{JobListing, Page, PositionFunction};
use crate::http::{HttpTransport, Transport};

/// Runs one CLI command against the job API and prints the result
pub struct ListingsService<T> {
    client: ListingsClient<T>,
    json: bool,
}

impl ListingsService<HttpTransport> {
    pub fn new(config: AppConfig, json: bool) -> Result<Self> {
        let transport = HttpTransport::from_settings(&config.client)?;
        let client = ListingsClient::new(config.client.base_url, transport);
        Ok(Self::with_client(client, json))
    }
}

impl<T: Transport> ListingsService<T> {
    pub fn with_client(client: ListingsClient<T>, json: bool) -> Self {
        Self { client, json }
    }

    pub async fn run(&mut self, command: &Command) -> Result<()> {
        info!("Using API at {}", self.client.base_url());
        let output = self.execute(command).await?;
        println!("{}", output);
        Ok(())
    }

    async fn execute(&mut self, command: &Command) -> Result<String> {
        match command {
            Command::Positions => {
                let page = self.client.fetch_position_functions().await?;
                self.render(&page, format_position_functions)
            }
            Command::Listings { page_size } => {
                if let Some(value) = page_size {
                    self.client.set_page_size(value);
                }
                let page = self.client.fetch_job_listings().await?;
                self.render(&page, format_job_listings)
            }
            Command::Search { query } => {
                let page = self.client.fetch_filtered_position_functions(query).await?;
                self.render(&page, format_job_listings)
            }
        }
    }

    fn render<R: Serialize>(
        &self,
        page: &Page<R>,
        summary: fn(&Page<R>) -> String,
    ) -> Result<String> {
        if self.json {
            Ok(serde_json::to_string_pretty(page)?)
        } else {
            Ok(summary(page))
        }
    }
}

fn format_job_listings(page: &Page<JobListing>) -> String {
    let lines = page
        .results
        .iter()
        .map(|listing| format_line(listing.id(), listing.title()));
    format_page(page, lines)
}

fn format_position_functions(page: &Page<PositionFunction>) -> String {
    let lines = page
        .results
        .iter()
        .map(|function| format_line(function.id(), function.name()));
    format_page(page, lines)
}

fn format_page<R>(page: &Page<R>, lines: impl Iterator<Item = String>) -> String {
    let total = page
        .total()
        .map_or_else(|| "?".to_string(), |count| count.to_string());
    let mut header = format!("{} of {}", page.len(), total);
    if page.has_more() {
        header.push_str(", more available");
    }
    let mut out = header.bold().to_string();
    for line in lines {
        out.push('\n');
        out.push_str(&line);
    }
    out
}

fn format_line(id: Option<&serde_json::Value>, label: Option<&str>) -> String {
    let id = id.map_or_else(|| "-".to_string(), |id| id.to_string());
    format!("  {} {}", id.dimmed(), label.unwrap_or("(untitled)"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::de::DeserializeOwned;
    use serde_json::{Value, json};
    use std::sync::{Arc, Mutex};

    struct StaticTransport {
        body: Value,
        urls: Arc<Mutex<Vec<String>>>,
    }

    impl Transport for StaticTransport {
        async fn get<R>(&self, url: &str) -> Result<R>
        where
            R: DeserializeOwned + Send,
        {
            self.urls.lock().unwrap().push(url.to_string());
            Ok(serde_json::from_value(self.body.clone())?)
        }
    }

    fn service(json: bool) -> (ListingsService<StaticTransport>, Arc<Mutex<Vec<String>>>) {
        let urls = Arc::new(Mutex::new(Vec::new()));
        let transport = StaticTransport {
            body: json!({
                "count": 12,
                "next": "https://api.example.com/job/listings/?page=2",
                "previous": null,
                "results": [{"id": 1, "title": "Engineer"}, {"id": 2, "name": "Designer"}]
            }),
            urls: Arc::clone(&urls),
        };
        let client = ListingsClient::new("https://api.example.com/", transport);
        (ListingsService::with_client(client, json), urls)
    }

    #[tokio::test]
    async fn test_listings_command_applies_page_size() {
        colored::control::set_override(false);
        let (mut service, urls) = service(false);
        let command = Command::Listings {
            page_size: Some("25".to_string()),
        };

        let output = service.execute(&command).await.unwrap();

        assert_eq!(output, "2 of 12, more available\n  1 Engineer\n  2 Designer");
        assert!(urls.lock().unwrap()[0].contains("page_size=25"));
    }

    #[tokio::test]
    async fn test_json_output_is_the_decoded_body() {
        let (mut service, _) = service(true);

        let output = service.execute(&Command::Positions).await.unwrap();

        let value: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["count"], json!(12));
        assert_eq!(value["results"][1]["name"], json!("Designer"));
        assert!(value.get("previous").is_none());
    }

    #[tokio::test]
    async fn test_search_uses_query() {
        let (mut service, urls) = service(false);
        let command = Command::Search {
            query: "rust".to_string(),
        };

        service.execute(&command).await.unwrap();

        assert_eq!(
            *urls.lock().unwrap(),
            vec!["https://api.example.com/job/position-functions/?search=rust".to_string()]
        );
    }
}
