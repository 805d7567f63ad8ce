// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use barman::prelude::*;

struct Staff(String);

impl HasUserRole for Staff {
    fn role(&self) -> &str {
        &self.0
    }
}

struct Reports;

impl Endpoint for Reports {
    type User = Staff;

    fn current_user(&self, request: &dyn Request) -> Option<Staff> {
        request.header("X-Role").map(|role| Staff(role.to_string()))
    }
}

#[endpoint(admin, path = "reports", environment = "development")]
#[logged_user(allowed_roles("admin", "auditor"))]
impl Reports {
    #[get("/{year: :digit:+}/{month}")]
    fn monthly(&self, _request: &mut dyn Request, _response: &mut dyn Response) -> Result<()> {
        Ok(())
    }

    #[get("/{name: [a-z]+}")]
    #[delete("/{name: [a-z]+}")]
    #[logged_user(allowed_roles("admin"), rejected_roles("auditor"))]
    fn named(&self, _request: &mut dyn Request, _response: &mut dyn Response) -> Result<()> {
        Ok(())
    }

    #[put("archive")]
    #[logged_user]
    fn r#archive(&self, _request: &mut dyn Request, _response: &mut dyn Response) -> Result<()> {
        Ok(())
    }
}

fn main() {
    assert_eq!(Reports::MAPPING, "/admin/reports/*");
    let monthly = Reports::ROUTES[0];
    assert_eq!(monthly.parameters, &["year", "month"]);
    assert_eq!(monthly.path, "/admin/reports/{year: :digit:+}/{month}");
    assert!(Reports::routes_for(Verb::Put).all(|route| route.handler == "archive"));
}
