// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use barman::prelude::*;

trait Store {
    fn name(&self) -> &'static str;
}

struct Memory;

impl Store for Memory {
    fn name(&self) -> &'static str {
        "memory"
    }
}

struct Visitor;

impl HasUserRole for Visitor {
    fn role(&self) -> &str {
        "visitor"
    }
}

struct Catalog<S> {
    store: S
}

impl<S: Store> Endpoint for Catalog<S> {
    type User = Visitor;

    fn current_user(&self, _request: &dyn Request) -> Option<Visitor> {
        Some(Visitor)
    }
}

#[endpoint(environment = "production")]
impl<S: Store> Catalog<S> {
    #[get]
    #[logged_user(rejected_roles("banned"))]
    fn index(&self, _request: &mut dyn Request, response: &mut dyn Response) -> Result<()> {
        barman::response::write_text(response, self.store.name())
    }
}

fn main() {
    assert_eq!(<Catalog<Memory> as Router>::MAPPING, "/api/catalog/*");

    let catalog = Catalog {
        store: Memory
    };
    let mut request = barman::memory::MemoryRequest::new(Verb::Get);
    let mut response = barman::memory::MemoryResponse::new();
    catalog.dispatch(&mut request, &mut response).unwrap();
    assert_eq!(response.body(), Some("memory"));
}
