// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use barman::{
    memory::{MemoryRequest, MemoryResponse},
    prelude::*
};

struct Nobody;

impl HasUserRole for Nobody {
    fn role(&self) -> &str {
        ""
    }
}

struct Tasks;

impl Endpoint for Tasks {
    type User = Nobody;

    fn current_user(&self, _request: &dyn Request) -> Option<Nobody> {
        None
    }
}

#[endpoint(path = "tasks", environment = "production")]
impl Tasks {
    #[get]
    fn index(&self, _request: &mut dyn Request, response: &mut dyn Response) -> Result<()> {
        barman::response::write_json(response, "[]")
    }

    #[post]
    fn save(&self, _request: &mut dyn Request, response: &mut dyn Response) -> Result<()> {
        barman::response::set_status(response, StatusCode::CREATED)
    }

    fn helper(&self) -> usize {
        1
    }
}

fn main() {
    assert_eq!(Tasks::MAPPING, "/api/tasks/*");
    assert_eq!(Tasks::ROUTES.len(), 2);
    assert_eq!(Tasks.helper(), 1);

    let mut request = MemoryRequest::new(Verb::Post);
    let mut response = MemoryResponse::new();
    Tasks.dispatch(&mut request, &mut response).unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
}
