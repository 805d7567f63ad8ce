// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Tests for dispatch planning.

use syn::{ItemImpl, parse_quote};

use super::*;
use crate::endpoint::parse::{EndpointArgs, EndpointDef};

fn table(item: ItemImpl) -> RouteTable {
    let def = EndpointDef::from_impl(EndpointArgs::default(), &item).unwrap();
    RouteTable::build(&def).unwrap()
}

fn roles(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

fn verb<'a>(plan: &'a DispatchPlan<'_>, verb: HttpVerb) -> &'a VerbPlan<'a> {
    plan.verbs.iter().find(|p| p.verb == verb).unwrap()
}

#[test]
fn role_tests() {
    assert_eq!(RoleTest::of(&[]), None);
    assert_eq!(RoleTest::of(&roles(&["*"])), None);
    assert_eq!(
        RoleTest::of(&roles(&["admin"])),
        Some(RoleTest::Equals("admin".into()))
    );
    let both = RoleTest::of(&roles(&["admin", "editor"])).unwrap();
    assert_eq!(both, RoleTest::OneOf(roles(&["admin", "editor"])));
}

#[test]
fn shared_requirements_are_hoisted() {
    let table = table(parse_quote! {
        #[logged_user(allowed_roles("admin"))]
        impl Tasks {
            #[get("/a")]
            fn a(&self) {}

            #[get("/{id}")]
            fn b(&self) {}
        }
    });
    let plan = DispatchPlan::build(&table, false);
    let get = verb(&plan, HttpVerb::Get);

    assert!(get.hoisted.logged_user);
    assert_eq!(get.hoisted.allowed, Some(RoleTest::Equals("admin".into())));
    assert!(get.branches.iter().all(|b| b.guards.is_empty()));
    assert!(get.needs_user());
    assert!(get.needs_role());
}

#[test]
fn differing_requirements_stay_inline() {
    let table = table(parse_quote! {
        impl Tasks {
            #[get("/a")]
            #[logged_user(allowed_roles("admin"))]
            fn a(&self) {}

            #[get("/b")]
            #[logged_user(allowed_roles("editor"))]
            fn b(&self) {}

            #[get("/c")]
            fn c(&self) {}
        }
    });
    let plan = DispatchPlan::build(&table, false);
    let get = verb(&plan, HttpVerb::Get);

    assert!(get.hoisted.is_empty());
    assert!(get.branches[0].guards.logged_user);
    assert_eq!(
        get.branches[1].guards.allowed,
        Some(RoleTest::Equals("editor".into()))
    );
    assert!(get.branches[2].guards.is_empty());
}

#[test]
fn concerns_are_hoisted_independently() {
    let table = table(parse_quote! {
        impl Tasks {
            #[get("/a")]
            #[logged_user(allowed_roles("admin"), rejected_roles("banned"))]
            fn a(&self) {}

            #[get("/b")]
            #[logged_user(allowed_roles("editor"), rejected_roles("banned"))]
            fn b(&self) {}
        }
    });
    let plan = DispatchPlan::build(&table, false);
    let get = verb(&plan, HttpVerb::Get);

    assert!(get.hoisted.logged_user);
    assert_eq!(get.hoisted.rejected, Some(RoleTest::Equals("banned".into())));
    assert_eq!(get.hoisted.allowed, None);
    assert_eq!(
        get.branches[0].guards,
        Guards {
            logged_user: false,
            anonymous:   false,
            allowed:     Some(RoleTest::Equals("admin".into())),
            rejected:    None
        }
    );
}

#[test]
fn rejecting_everyone_hoists_anonymous_guard() {
    let table = table(parse_quote! {
        #[logged_user(rejected_roles("*"))]
        impl Session {
            #[post("/login")]
            fn login(&self) {}

            #[post("/register")]
            fn register(&self) {}
        }
    });
    let plan = DispatchPlan::build(&table, false);
    let post = verb(&plan, HttpVerb::Post);

    assert!(post.hoisted.anonymous);
    assert_eq!(post.hoisted.rejected, None);
    assert!(post.needs_user());
    assert!(!post.needs_role());
}

#[test]
fn any_logged_user_needs_no_role() {
    let table = table(parse_quote! {
        #[logged_user]
        impl Profile {
            #[get]
            fn index(&self) {}
        }
    });
    let plan = DispatchPlan::build(&table, false);
    let get = verb(&plan, HttpVerb::Get);

    assert!(get.hoisted.logged_user);
    assert!(!get.needs_role());
}

#[test]
fn verbs_are_planned_separately() {
    let table = table(parse_quote! {
        impl Tasks {
            #[get]
            fn index(&self) {}

            #[post]
            #[logged_user]
            fn save(&self) {}
        }
    });
    let plan = DispatchPlan::build(&table, true);

    assert_eq!(plan.verbs.len(), 4);
    assert!(!verb(&plan, HttpVerb::Get).needs_user());
    assert!(verb(&plan, HttpVerb::Post).hoisted.logged_user);
    assert!(verb(&plan, HttpVerb::Put).branches.is_empty());
    assert!(verb(&plan, HttpVerb::Delete).hoisted.is_empty());
    assert!(plan.verbs.iter().all(|p| p.development));
}

#[test]
fn matchers_are_referenced_by_slot() {
    let table = table(parse_quote! {
        impl Tasks {
            #[get("/{id}")]
            #[put("/{id}")]
            fn task(&self) {}

            #[get]
            fn index(&self) {}

            #[put("/done")]
            fn done(&self) {}
        }
    });
    let plan = DispatchPlan::build(&table, false);

    assert_eq!(plan.matchers.len(), 2);
    let get = verb(&plan, HttpVerb::Get);
    assert_eq!(get.branches[0].matcher, MatcherRef::Slot(0));
    assert_eq!(get.branches[1].matcher, MatcherRef::Index);
    let put = verb(&plan, HttpVerb::Put);
    assert_eq!(put.branches[0].matcher, MatcherRef::Slot(0));
    assert_eq!(put.branches[1].matcher, MatcherRef::Slot(1));
}

#[test]
fn branches_keep_declaration_order() {
    let table = table(parse_quote! {
        impl Tasks {
            #[get("/{id}")]
            fn any(&self) {}

            #[get("/new")]
            fn new(&self) {}
        }
    });
    let plan = DispatchPlan::build(&table, false);
    let handlers: Vec<String> = verb(&plan, HttpVerb::Get)
        .branches
        .iter()
        .map(|b| b.route.handler.to_string())
        .collect();
    assert_eq!(handlers, vec!["any", "new"]);
}
