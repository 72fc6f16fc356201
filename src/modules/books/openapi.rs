use serde_json::{json, Value};

fn json_response(description: &str, schema: Value) -> Value {
    json!({
        "description": description,
        "content": {
            "application/json": { "schema": schema }
        }
    })
}

fn schema_ref(name: &str) -> Value {
    json!({ "$ref": format!("#/components/schemas/{}", name) })
}

fn book_list() -> Value {
    json!({ "type": "array", "items": schema_ref("Book") })
}

fn id_parameter() -> Value {
    json!({
        "name": "id",
        "in": "path",
        "required": true,
        "schema": { "type": "string" },
        "description": "Identifier of the book"
    })
}

fn book_body() -> Value {
    json!({
        "required": true,
        "content": {
            "application/json": { "schema": schema_ref("BookInput") }
        }
    })
}

/// OpenAPI fragment for the Books module; paths are relative to `/api/books`.
pub fn fragment() -> Value {
    let error = || json_response("Error", schema_ref("ErrorResponse"));

    json!({
        "paths": {
            "/": {
                "get": {
                    "summary": "List books",
                    "tags": ["Books"],
                    "responses": {
                        "200": json_response("All books in insertion order", book_list())
                    }
                },
                "post": {
                    "summary": "Create a book",
                    "description": "Any `id` in the body is ignored; the server assigns one.",
                    "tags": ["Books"],
                    "requestBody": book_body(),
                    "responses": {
                        "200": json_response("The stored book with its assigned id", schema_ref("Book")),
                        "400": error()
                    }
                }
            },
            "/{id}": {
                "parameters": [id_parameter()],
                "get": {
                    "summary": "Get a book",
                    "description": "Unknown ids answer 404, or an empty book when the lenient not-found policy is configured.",
                    "tags": ["Books"],
                    "responses": {
                        "200": json_response("The book", schema_ref("Book")),
                        "404": error()
                    }
                },
                "put": {
                    "summary": "Replace a book",
                    "description": "All fields are replaced; the id always comes from the path. Unknown ids answer 404, or the whole collection under the lenient not-found policy.",
                    "tags": ["Books"],
                    "requestBody": book_body(),
                    "responses": {
                        "200": json_response("The updated book", schema_ref("Book")),
                        "400": error(),
                        "404": error()
                    }
                },
                "delete": {
                    "summary": "Delete a book",
                    "description": "Deleting an unknown id is a no-op.",
                    "tags": ["Books"],
                    "responses": {
                        "200": json_response("The remaining books", book_list())
                    }
                }
            }
        },
        "components": {
            "schemas": {
                "Author": {
                    "type": "object",
                    "properties": {
                        "firstname": { "type": "string" },
                        "lastname": { "type": "string" }
                    }
                },
                "Book": {
                    "type": "object",
                    "properties": {
                        "id": {
                            "type": "string",
                            "description": "Server-assigned identifier"
                        },
                        "isbn": { "type": "string" },
                        "title": { "type": "string" },
                        "author": {
                            "oneOf": [schema_ref("Author"), { "type": "null" }]
                        }
                    },
                    "required": ["id", "isbn", "title", "author"]
                },
                "BookInput": {
                    "type": "object",
                    "properties": {
                        "isbn": { "type": "string" },
                        "title": { "type": "string" },
                        "author": {
                            "oneOf": [schema_ref("Author"), { "type": "null" }]
                        }
                    }
                }
            }
        }
    })
}
