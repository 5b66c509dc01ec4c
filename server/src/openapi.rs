//! In-code OpenAPI 3 document for the todo API.
//!
//! # Design
//! The document is built as a `serde_json::Value` and serialized to YAML by
//! the `/.well-known/openapi.yaml` handler. Keeping it in code (rather
//! than a static file) keeps the `servers` URL in step with the request
//! host and the schemas in step with the `TodoItem` wire shape.

use serde_json::{json, Value};

/// Builds the OpenAPI document with `host` as the server authority.
pub fn document(host: &str) -> Value {
    json!({
        "openapi": "3.0.1",
        "info": {
            "title": "TODO List",
            "description": "A plugin that lets the user create and manage a per-user TODO list.",
            "version": "v1"
        },
        "servers": [
            { "url": format!("https://{host}") }
        ],
        "paths": {
            "/todos/{username}": {
                "post": {
                    "operationId": "AddTodo",
                    "summary": "Add a todo to the user's list",
                    "parameters": [username_parameter()],
                    "requestBody": {
                        "required": true,
                        "content": {
                            "application/json": {
                                "schema": { "$ref": "#/components/schemas/TodoItem" }
                            }
                        }
                    },
                    "responses": { "200": { "description": "OK" } }
                },
                "get": {
                    "operationId": "GetTodos",
                    "summary": "Get the user's todo list",
                    "parameters": [username_parameter()],
                    "responses": {
                        "200": {
                            "description": "OK",
                            "content": {
                                "application/json": {
                                    "schema": {
                                        "type": "array",
                                        "items": { "$ref": "#/components/schemas/TodoItem" }
                                    }
                                }
                            }
                        }
                    }
                },
                "delete": {
                    "operationId": "DeleteTodo",
                    "summary": "Delete the todo at an index from the user's list",
                    "parameters": [
                        username_parameter(),
                        {
                            "name": "todoIdx",
                            "in": "query",
                            "required": true,
                            "schema": { "type": "integer" }
                        }
                    ],
                    "responses": { "200": { "description": "OK" } }
                }
            }
        },
        "components": {
            "schemas": {
                "TodoItem": {
                    "type": "object",
                    "required": ["todo"],
                    "properties": {
                        "todo": { "type": "string" }
                    }
                }
            }
        }
    })
}

fn username_parameter() -> Value {
    json!({
        "name": "username",
        "in": "path",
        "required": true,
        "schema": { "type": "string" }
    })
}
