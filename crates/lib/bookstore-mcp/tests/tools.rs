use std::time::Duration;

use bookstore_mcp::BookstoreMcp;
use bookstore_mcp::tools::catalog::{
    FindAuthorByNameParams,
    FindBookByTitleParams,
    FindBooksByAuthorParams,
    GetAuthorByIdParams,
};
use bookstore_mcp::tools::customers::{
    CustomerNameParams,
    FindCustomerByNameParams,
    GetOrderDetailsParams,
};
use bookstore_store::ReferenceData;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolRequestParams, CallToolResult, ErrorCode, RawContent};
use rmcp::service::RunningService;
use rmcp::{RoleClient, ServiceError, ServiceExt};
use serde_json::{Value, json};

fn server() -> BookstoreMcp {
    let data = ReferenceData::builtin()
        .unwrap_or_else(|err| panic!("failed to load builtin fixture: {err}"));
    BookstoreMcp::new(data)
}

fn text(result: &CallToolResult) -> String {
    assert_eq!(result.is_error, Some(false), "tool result should be a success");
    assert_eq!(result.content.len(), 1, "expected exactly one content item");
    match &result.content[0].raw {
        RawContent::Text(content) => content.text.clone(),
        _ => panic!("expected text content"),
    }
}

fn json_body(result: &CallToolResult) -> Value {
    let body = text(result);
    serde_json::from_str(&body).unwrap_or_else(|err| panic!("expected JSON body {body:?}: {err}"))
}

/// Serves a fresh server over an in-memory pipe and connects a bare client.
async fn connect() -> RunningService<RoleClient, ()> {
    let (server_io, client_io) = tokio::io::duplex(4096);
    tokio::spawn(async move {
        if let Ok(running) = server().serve(server_io).await {
            let _ = running.waiting().await;
        }
    });
    ().serve(client_io).await.expect("client should initialize")
}

fn call(name: &'static str, arguments: Value) -> CallToolRequestParams {
    CallToolRequestParams {
        meta: None,
        name: name.into(),
        arguments: arguments.as_object().cloned(),
        task: None,
    }
}

fn customer(name: &str) -> Parameters<CustomerNameParams> {
    Parameters(CustomerNameParams {
        customer_name: name.to_string(),
    })
}

#[tokio::test]
async fn find_book_by_title_returns_merged_record() {
    let result = server()
        .find_book_by_title(Parameters(FindBookByTitleParams {
            title: "silent".to_string(),
        }))
        .await
        .expect("tool should succeed");

    assert_eq!(
        json_body(&result),
        json!({
            "book_id": "BOOK100",
            "title": "The Silent Forest",
            "author_id": "AUTH001",
            "genre": "Fantasy",
            "price": 14.99,
            "stock": 25,
        })
    );
}

#[tokio::test]
async fn not_found_is_a_text_message_not_an_error() {
    let result = server()
        .find_author_by_name(Parameters(FindAuthorByNameParams {
            name: "nobody".to_string(),
        }))
        .await
        .expect("tool should succeed");

    assert_eq!(text(&result), "No author found matching 'nobody'.");
}

#[tokio::test]
async fn find_customer_by_name_returns_record() {
    let result = server()
        .find_customer_by_name(Parameters(FindCustomerByNameParams {
            name: "SOPHIA".to_string(),
        }))
        .await
        .expect("tool should succeed");

    let body = json_body(&result);
    assert_eq!(body["customer_id"], "CUST845");
    assert_eq!(body["email"], "sophia.m@example.com");
}

#[tokio::test]
async fn find_books_by_author_returns_list() {
    let result = server()
        .find_books_by_author(Parameters(FindBooksByAuthorParams {
            author_name: "harper".to_string(),
        }))
        .await
        .expect("tool should succeed");

    let body = json_body(&result);
    let books = body.as_array().expect("books should be a list");
    assert_eq!(books.len(), 1);
    assert_eq!(books[0]["book_id"], "BOOK205");
    assert_eq!(books[0]["price"], json!(19.5));
}

#[tokio::test]
async fn find_orders_by_customer_returns_map() {
    let result = server()
        .find_orders_by_customer(customer("Liam"))
        .await
        .expect("tool should succeed");

    let body = json_body(&result);
    let orders = body.as_object().expect("orders should be a map");
    assert_eq!(orders.len(), 2);
    assert_eq!(orders["ORD9001"]["quantity"], 2);
    assert_eq!(orders["ORD9021"]["date"], "2024-03-05");
}

#[tokio::test]
async fn total_spent_is_always_text() {
    let mcp = server();
    let found = mcp
        .total_spent_by_customer(customer("Liam"))
        .await
        .expect("tool should succeed");
    assert_eq!(text(&found), "Customer 'Liam' has spent $65.23 in total.");

    let missing = mcp
        .total_spent_by_customer(customer("Nobody"))
        .await
        .expect("tool should succeed");
    assert_eq!(text(&missing), "No customer found matching 'Nobody'.");
}

#[tokio::test]
async fn get_order_details_returns_composite() {
    let mcp = server();
    let result = mcp
        .get_order_details(Parameters(GetOrderDetailsParams {
            order_id: "ORD9001".to_string(),
        }))
        .await
        .expect("tool should succeed");

    let body = json_body(&result);
    assert_eq!(body["order_id"], "ORD9001");
    assert_eq!(body["order"]["price"], json!(29.98));
    assert_eq!(body["book"]["title"], "The Silent Forest");
    assert_eq!(body["customer"]["name"], "Liam Anderson");

    let missing = mcp
        .get_order_details(Parameters(GetOrderDetailsParams {
            order_id: "ORD1234".to_string(),
        }))
        .await
        .expect("tool should succeed");
    assert_eq!(text(&missing), "No order found with ID 'ORD1234'.");
}

#[tokio::test]
async fn get_author_by_id_exact() {
    let mcp = server();
    let result = mcp
        .get_author_by_id(Parameters(GetAuthorByIdParams {
            author_id: "AUTH002".to_string(),
        }))
        .await
        .expect("tool should succeed");
    let body = json_body(&result);
    assert_eq!(body["author_id"], "AUTH002");
    assert_eq!(body["nationality"], "Spanish");

    let missing = mcp
        .get_author_by_id(Parameters(GetAuthorByIdParams {
            author_id: "AUTH404".to_string(),
        }))
        .await
        .expect("tool should succeed");
    assert_eq!(text(&missing), "No author found with ID 'AUTH404'.");
}

#[tokio::test]
async fn blank_argument_is_invalid_params() {
    let err = server()
        .find_book_by_title(Parameters(FindBookByTitleParams {
            title: "   ".to_string(),
        }))
        .await
        .expect_err("blank title should be rejected");

    assert_eq!(err.code.0, ErrorCode::INVALID_PARAMS.0);
    assert_eq!(err.message, "title is required");
}

#[tokio::test]
async fn health_and_help() {
    let mcp = server();
    let health = mcp.health().await.expect("health should succeed");
    assert_eq!(text(&health), "ok");

    let help = mcp.help().await.expect("help should succeed");
    let body = json_body(&help);
    let commands = body["commands"].as_array().expect("commands list");
    assert!(
        commands
            .iter()
            .any(|command| command.as_str().is_some_and(|c| c.starts_with("get_order_details")))
    );
}

#[tokio::test]
async fn registers_every_query_tool() {
    let router = BookstoreMcp::tool_router_core()
        + BookstoreMcp::tool_router_catalog()
        + BookstoreMcp::tool_router_customers()
        + BookstoreMcp::tool_router_context();
    let mut names: Vec<String> = router
        .list_all()
        .into_iter()
        .map(|tool| tool.name.to_string())
        .collect();
    names.sort();

    assert_eq!(
        names,
        vec![
            "get_author_by_id",
            "get_author_by_name",
            "get_book_by_title",
            "get_books_by_author",
            "get_customer_by_name",
            "get_order_details",
            "get_orders_by_customer",
            "get_total_spent_by_customer",
            "health",
            "help",
        ]
    );
}

#[tokio::test]
async fn simulated_latency_delays_queries() {
    let mcp = server().with_simulated_latency(Some(Duration::from_millis(25)));
    let started = tokio::time::Instant::now();
    let result = mcp
        .find_customer_by_name(Parameters(FindCustomerByNameParams {
            name: "liam".to_string(),
        }))
        .await
        .expect("tool should succeed");
    assert!(started.elapsed() >= Duration::from_millis(25));
    assert_eq!(json_body(&result)["customer_id"], "CUST700");
}

#[tokio::test]
async fn client_calls_tools_by_registered_name() {
    let client = connect().await;

    let info = client.peer_info().expect("server info after initialize");
    assert_eq!(info.server_info.name, "Bookstore MCP Server");

    let spent = client
        .call_tool(call(
            "get_total_spent_by_customer",
            json!({ "customer_name": "Liam" }),
        ))
        .await
        .expect("call should succeed");
    assert_eq!(text(&spent), "Customer 'Liam' has spent $65.23 in total.");

    let book = client
        .call_tool(call("get_book_by_title", json!({ "title": "horizon" })))
        .await
        .expect("call should succeed");
    assert_eq!(json_body(&book)["book_id"], "BOOK205");

    client.cancel().await.expect("client should shut down");
}

#[tokio::test]
async fn missing_argument_is_invalid_params_over_the_wire() {
    let client = connect().await;

    let err = client
        .call_tool(call("get_book_by_title", json!({})))
        .await
        .expect_err("missing title should be rejected");
    match err {
        ServiceError::McpError(data) => {
            assert_eq!(data.code.0, ErrorCode::INVALID_PARAMS.0);
            assert!(data.message.contains("title"), "message: {}", data.message);
        }
        other => panic!("expected an MCP error, got {other:?}"),
    }

    let err = client
        .call_tool(call("get_orders_by_customer", json!({ "customer_name": " " })))
        .await
        .expect_err("blank name should be rejected");
    assert!(
        matches!(err, ServiceError::McpError(ref data) if data.code.0 == ErrorCode::INVALID_PARAMS.0)
    );

    client.cancel().await.expect("client should shut down");
}
