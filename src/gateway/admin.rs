//! Admin API gateway implementation using GraphQL with type-safe cynic queries.
//!
//! # Security Note - Logging
//!
//! The admin API key is protected from being logged through reqwest's request
//! logging by using the `RedactedHeader` wrapper type, which implements
//! `Display` and `Debug` to redact sensitive values. Even if debug logging is
//! accidentally enabled, the Authorization header value will be displayed as
//! `[REDACTED]` instead of the actual API key.

use std::fmt;
use std::time::Duration;

use reqwest::Client;
use reqwest::header;
use secrecy::{ExposeSecret, SecretBox};
use tracing::debug;

use crate::config::Config;
use crate::error::{Result, StorekeepError};

use super::{
    Gateway, InventoryItem, Order, OrderInput, PAGE_SIZE, Product, ProductChanges,
};

/// Wrapper for sensitive header values that redacts the value when formatted.
struct RedactedHeader {
    value: String,
}

impl RedactedHeader {
    fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }

    fn as_header_value(&self) -> Result<header::HeaderValue> {
        header::HeaderValue::from_str(&self.value)
            .map_err(|_| StorekeepError::Auth("API key is not a valid header value".to_string()))
    }
}

impl fmt::Display for RedactedHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED]")
    }
}

impl fmt::Debug for RedactedHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedactedHeader")
            .field("value", &"[REDACTED]")
            .finish()
    }
}

mod graphql {
    // Re-export cynic types we need
    pub use cynic::{GraphQlResponse, MutationBuilder, QueryBuilder};

    // Import schema from the dedicated storekeep-schema crate.
    // The import MUST be named `schema` for cynic derives to work.
    use storekeep_schema::admin as schema;

    use serde::Deserialize;

    /// Custom error extensions type for admin API errors
    #[derive(Debug, Clone, Deserialize, PartialEq)]
    #[serde(rename_all = "camelCase")]
    pub struct ErrorExtensions {
        pub code: Option<String>,
    }

    // Custom Scalars

    /// DateTime scalar (ISO 8601 formatted string)
    #[derive(cynic::Scalar, Debug, Clone)]
    #[cynic(graphql_type = "DateTime")]
    pub struct DateTime(pub String);

    /// Decimal monetary amount, serialized as a string
    #[derive(cynic::Scalar, Debug, Clone)]
    #[cynic(graphql_type = "Decimal")]
    pub struct Decimal(pub String);

    /// String carrying HTML markup
    #[derive(cynic::Scalar, Debug, Clone)]
    #[cynic(graphql_type = "Html")]
    pub struct Html(pub String);

    // Query Variables

    /// Variables for fetching orders
    #[derive(cynic::QueryVariables, Debug)]
    pub struct OrdersQueryVariables {
        pub first: Option<i32>,
        pub query: Option<String>,
    }

    /// Variables for the single-page inventory and product reads
    #[derive(cynic::QueryVariables, Debug)]
    pub struct PageQueryVariables {
        pub first: Option<i32>,
    }

    /// Variables for creating an order
    #[derive(cynic::QueryVariables, Debug)]
    pub struct OrderCreateVariables {
        pub input: OrderCreateInput,
    }

    /// Variables for updating a product
    #[derive(cynic::QueryVariables, Debug)]
    pub struct ProductUpdateVariables {
        pub input: ProductInput,
    }

    // Input Objects

    /// Input for creating an order
    #[derive(cynic::InputObject, Debug, Clone)]
    #[cynic(rename_all = "camelCase")]
    pub struct OrderCreateInput {
        pub customer_id: cynic::Id,
        pub line_items: Vec<OrderLineItemInput>,
    }

    /// A single order line
    #[derive(cynic::InputObject, Debug, Clone)]
    #[cynic(rename_all = "camelCase")]
    pub struct OrderLineItemInput {
        pub product_id: cynic::Id,
        pub quantity: i32,
        pub price: Decimal,
    }

    /// Input for updating a product
    #[derive(cynic::InputObject, Debug, Clone)]
    #[cynic(rename_all = "camelCase")]
    pub struct ProductInput {
        pub id: cynic::Id,
        pub title: Option<String>,
        pub description_html: Option<Html>,
    }

    // Query Fragments - Orders

    /// Query to fetch a page of orders
    #[derive(cynic::QueryFragment, Debug)]
    #[cynic(graphql_type = "Query", variables = "OrdersQueryVariables")]
    pub struct OrdersQuery {
        #[arguments(first: $first, query: $query)]
        pub orders: OrderConnection,
    }

    /// Connection of orders
    #[derive(cynic::QueryFragment, Debug)]
    pub struct OrderConnection {
        pub nodes: Vec<Order>,
        #[allow(dead_code)]
        pub page_info: PageInfo,
    }

    /// Pagination info
    #[derive(cynic::QueryFragment, Debug)]
    pub struct PageInfo {
        #[allow(dead_code)]
        pub has_next_page: bool,
        #[allow(dead_code)]
        pub end_cursor: Option<String>,
    }

    /// Order fragment for the orders read
    #[derive(cynic::QueryFragment, Debug)]
    pub struct Order {
        pub id: cynic::Id,
        pub name: String,
        pub created_at: DateTime,
        pub customer: Option<Customer>,
        pub channel_information: Option<ChannelInformation>,
        pub total_price_set: MoneyBag,
        pub display_financial_status: String,
        pub display_fulfillment_status: String,
    }

    /// Customer attached to an order
    #[derive(cynic::QueryFragment, Debug)]
    pub struct Customer {
        pub first_name: Option<String>,
    }

    /// Sales channel information
    #[derive(cynic::QueryFragment, Debug)]
    pub struct ChannelInformation {
        pub app: ChannelApp,
    }

    /// The app a sales channel belongs to
    #[derive(cynic::QueryFragment, Debug)]
    pub struct ChannelApp {
        pub title: String,
    }

    /// Money in all relevant currencies
    #[derive(cynic::QueryFragment, Debug)]
    pub struct MoneyBag {
        pub presentment_money: MoneyV2,
    }

    /// A monetary value
    #[derive(cynic::QueryFragment, Debug)]
    pub struct MoneyV2 {
        pub amount: Decimal,
    }

    // Query Fragments - Inventory

    /// Query to fetch a page of inventory items
    #[derive(cynic::QueryFragment, Debug)]
    #[cynic(graphql_type = "Query", variables = "PageQueryVariables")]
    pub struct InventoryItemsQuery {
        #[arguments(first: $first)]
        pub inventory_items: InventoryItemConnection,
    }

    /// Connection of inventory items
    #[derive(cynic::QueryFragment, Debug)]
    pub struct InventoryItemConnection {
        pub edges: Vec<InventoryItemEdge>,
        #[allow(dead_code)]
        pub page_info: PageInfo,
    }

    /// Edge wrapping an inventory item
    #[derive(cynic::QueryFragment, Debug)]
    pub struct InventoryItemEdge {
        pub node: InventoryItem,
    }

    /// Inventory item fragment
    #[derive(cynic::QueryFragment, Debug)]
    pub struct InventoryItem {
        pub id: cynic::Id,
        pub sku: Option<String>,
        pub variant: Option<ProductVariant>,
    }

    /// Variant owning an inventory item
    #[derive(cynic::QueryFragment, Debug)]
    pub struct ProductVariant {
        pub product: Product,
    }

    // Query Fragments - Products

    /// Query to fetch a page of products
    #[derive(cynic::QueryFragment, Debug)]
    #[cynic(graphql_type = "Query", variables = "PageQueryVariables")]
    pub struct ProductsQuery {
        #[arguments(first: $first)]
        pub products: ProductConnection,
    }

    /// Connection of products
    #[derive(cynic::QueryFragment, Debug)]
    pub struct ProductConnection {
        pub edges: Vec<ProductEdge>,
        #[allow(dead_code)]
        pub page_info: PageInfo,
    }

    /// Edge wrapping a product
    #[derive(cynic::QueryFragment, Debug)]
    pub struct ProductEdge {
        pub node: Product,
    }

    /// Product fragment
    #[derive(cynic::QueryFragment, Debug)]
    pub struct Product {
        pub id: cynic::Id,
        pub title: String,
        pub description_html: Html,
    }

    // Mutation Fragments - Create Order

    /// Mutation to create an order
    #[derive(cynic::QueryFragment, Debug)]
    #[cynic(graphql_type = "Mutation", variables = "OrderCreateVariables")]
    pub struct OrderCreateMutation {
        #[arguments(input: $input)]
        pub order_create: OrderCreatePayload,
    }

    /// Payload returned from order creation
    #[derive(cynic::QueryFragment, Debug)]
    pub struct OrderCreatePayload {
        pub order: Option<CreatedOrder>,
        pub user_errors: Vec<UserError>,
    }

    /// Created order (minimal fields)
    #[derive(cynic::QueryFragment, Debug)]
    #[cynic(graphql_type = "Order")]
    pub struct CreatedOrder {
        pub id: cynic::Id,
    }

    // Mutation Fragments - Update Product

    /// Mutation to update a product
    #[derive(cynic::QueryFragment, Debug)]
    #[cynic(graphql_type = "Mutation", variables = "ProductUpdateVariables")]
    pub struct ProductUpdateMutation {
        #[arguments(input: $input)]
        pub product_update: ProductUpdatePayload,
    }

    /// Payload returned from product update
    #[derive(cynic::QueryFragment, Debug)]
    pub struct ProductUpdatePayload {
        pub product: Option<Product>,
        pub user_errors: Vec<UserError>,
    }

    /// Input rejection reported by the platform
    #[derive(cynic::QueryFragment, Debug)]
    pub struct UserError {
        pub field: Option<Vec<String>>,
        pub message: String,
    }
}

use graphql::*;

/// Gateway backed by the platform's admin GraphQL endpoint.
pub struct AdminGateway {
    client: Client,
    api_key: SecretBox<String>,
    endpoint: String,
}

impl AdminGateway {
    /// Create a gateway from configuration.
    ///
    /// Fails before any network traffic if the shop domain or API key is
    /// missing; an invalid key later surfaces as an HTTP 401/403 auth error.
    pub fn from_config(config: &Config) -> Result<Self> {
        let shop = config.shop()?;
        let api_key = config.api_key()?.to_string();

        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout))
            .connect_timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            api_key: SecretBox::new(Box::new(api_key)),
            endpoint: format!("https://{}/admin/api/graphql", shop),
        })
    }

    /// Execute a GraphQL operation (query or mutation).
    ///
    /// There is no retry: a transport or API failure is converted and
    /// returned as-is for the UI layer to surface.
    async fn execute<ResponseData, Vars>(
        &self,
        operation: cynic::Operation<ResponseData, Vars>,
    ) -> Result<ResponseData>
    where
        ResponseData: serde::de::DeserializeOwned + 'static,
        Vars: serde::Serialize + std::marker::Sync,
    {
        let auth_header = RedactedHeader::new(self.api_key.expose_secret());
        debug!(endpoint = %self.endpoint, "executing admin API operation");

        let response = self
            .client
            .post(&self.endpoint)
            .header(header::AUTHORIZATION, auth_header.as_header_value()?)
            .header(
                header::CONTENT_TYPE,
                header::HeaderValue::from_static("application/json"),
            )
            .json(&operation)
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(StorekeepError::Auth(format!(
                "admin API rejected the credentials (HTTP {})",
                status.as_u16()
            )));
        }
        if !status.is_success() {
            return Err(StorekeepError::Api(format!(
                "admin API returned HTTP {}",
                status.as_u16()
            )));
        }

        let result: GraphQlResponse<ResponseData, ErrorExtensions> = response.json().await?;

        // Handle GraphQL errors - preserve individual error details
        if let Some(errors) = result.errors {
            let structured_errors: Vec<crate::error::GraphQlError> = errors
                .iter()
                .map(|e| {
                    let code = e.extensions.as_ref().and_then(|ext| ext.code.clone());
                    let path = e.path.as_ref().map(|p| {
                        p.iter()
                            .map(|segment| match segment {
                                cynic::GraphQlErrorPathSegment::Field(name) => name.clone(),
                                cynic::GraphQlErrorPathSegment::Index(idx) => idx.to_string(),
                            })
                            .collect::<Vec<_>>()
                            .join(".")
                    });
                    crate::error::GraphQlError {
                        message: e.message.clone(),
                        code,
                        path,
                    }
                })
                .collect();

            let partial_data = result.data.is_some();

            return Err(StorekeepError::GraphQlErrors {
                errors: structured_errors,
                partial_data,
            });
        }

        result
            .data
            .ok_or_else(|| StorekeepError::Api("no data in admin API response".to_string()))
    }
}

fn user_errors_to_error(errors: &[UserError]) -> StorekeepError {
    let joined = errors
        .iter()
        .map(|e| match &e.field {
            Some(field) if !field.is_empty() => format!("{}: {}", field.join("."), e.message),
            _ => e.message.clone(),
        })
        .collect::<Vec<_>>()
        .join("; ");
    StorekeepError::UserErrors(joined)
}

impl Gateway for AdminGateway {
    async fn fetch_orders(&self, query: Option<String>) -> Result<Vec<Order>> {
        let operation = OrdersQuery::build(OrdersQueryVariables {
            first: Some(PAGE_SIZE),
            query,
        });

        let response = self.execute(operation).await?;

        Ok(response
            .orders
            .nodes
            .into_iter()
            .map(|order| Order {
                id: order.id.into_inner(),
                name: order.name,
                created_at: order.created_at.0,
                customer_first_name: order.customer.and_then(|c| c.first_name),
                channel_title: order.channel_information.map(|c| c.app.title),
                total_amount: order.total_price_set.presentment_money.amount.0,
                financial_status: order.display_financial_status,
                fulfillment_status: order.display_fulfillment_status,
            })
            .collect())
    }

    async fn fetch_inventory(&self) -> Result<Vec<InventoryItem>> {
        let operation = InventoryItemsQuery::build(PageQueryVariables {
            first: Some(PAGE_SIZE),
        });

        let response = self.execute(operation).await?;

        Ok(response
            .inventory_items
            .edges
            .into_iter()
            .map(|edge| InventoryItem {
                id: edge.node.id.into_inner(),
                sku: edge.node.sku,
                product_title: edge.node.variant.map(|v| v.product.title),
            })
            .collect())
    }

    async fn fetch_products(&self) -> Result<Vec<Product>> {
        let operation = ProductsQuery::build(PageQueryVariables {
            first: Some(PAGE_SIZE),
        });

        let response = self.execute(operation).await?;

        Ok(response
            .products
            .edges
            .into_iter()
            .map(|edge| Product {
                id: edge.node.id.into_inner(),
                title: edge.node.title,
                description_html: edge.node.description_html.0,
            })
            .collect())
    }

    async fn create_order(&self, input: OrderInput) -> Result<String> {
        let operation = OrderCreateMutation::build(OrderCreateVariables {
            input: OrderCreateInput {
                customer_id: cynic::Id::new(input.customer_id),
                line_items: input
                    .line_items
                    .into_iter()
                    .map(|line| OrderLineItemInput {
                        product_id: cynic::Id::new(line.product_id),
                        quantity: line.quantity,
                        price: Decimal(line.price),
                    })
                    .collect(),
            },
        });

        let response = self.execute(operation).await?;
        let payload = response.order_create;

        if !payload.user_errors.is_empty() {
            return Err(user_errors_to_error(&payload.user_errors));
        }

        payload
            .order
            .map(|o| o.id.into_inner())
            .ok_or_else(|| StorekeepError::Api("order creation returned no order".to_string()))
    }

    async fn update_product(&self, id: String, changes: ProductChanges) -> Result<Product> {
        let operation = ProductUpdateMutation::build(ProductUpdateVariables {
            input: ProductInput {
                id: cynic::Id::new(id),
                title: Some(changes.title),
                description_html: Some(Html(changes.description_html)),
            },
        });

        let response = self.execute(operation).await?;
        let payload = response.product_update;

        if !payload.user_errors.is_empty() {
            return Err(user_errors_to_error(&payload.user_errors));
        }

        payload
            .product
            .map(|p| Product {
                id: p.id.into_inner(),
                title: p.title,
                description_html: p.description_html.0,
            })
            .ok_or_else(|| StorekeepError::Api("product update returned no product".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_errors_join_field_paths() {
        let errors = vec![
            UserError {
                field: Some(vec!["input".to_string(), "title".to_string()]),
                message: "can't be blank".to_string(),
            },
            UserError {
                field: None,
                message: "shop is frozen".to_string(),
            },
        ];
        let err = user_errors_to_error(&errors);
        assert_eq!(
            err.to_string(),
            "rejected by the platform: input.title: can't be blank; shop is frozen"
        );
    }

    #[test]
    fn test_redacted_header_never_leaks() {
        let header = RedactedHeader::new("super-secret-key");
        assert_eq!(format!("{}", header), "[REDACTED]");
        assert!(!format!("{:?}", header).contains("super-secret-key"));
    }
}
