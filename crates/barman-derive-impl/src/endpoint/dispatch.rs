// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Dispatch synthesis.
//!
//! For every verb the dispatcher runs the same state machine:
//!
//! ```text
//! development? ──► set Access-Control-Allow-Origin: *
//!      │
//! hoisted guards ──fail──► 403
//!      │
//! route 1 matches? ──yes──► inline guards ──fail──► 403
//!      │ no                      │ pass
//! route 2 matches? ...           └──► handler
//!      │ no
//! unhandled hook
//! ```
//!
//! A guard concern is hoisted when every route of the verb agrees on it, so
//! the check runs once before matching instead of inside every branch.
//! Concerns are decided independently:
//!
//! | Concern | Hoisted when |
//! |---------|--------------|
//! | logged user | every route requires one |
//! | anonymous user | every route requires one |
//! | allowed roles | every route lists the same roles |
//! | rejected roles | every route lists the same roles |
//!
//! Guards always run in that order.

use super::{
    route::{ANY_ROLE, HttpVerb, Route},
    table::RouteTable
};

/// Role comparison emitted for one role list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleTest {
    /// The role equals this one.
    Equals(String),

    /// The role is one of these.
    OneOf(Vec<String>)
}

impl RoleTest {
    /// Test for a role list, `None` when the list constrains nothing.
    ///
    /// A lone `"*"` is enforced by the logged-user or anonymous guard.
    pub fn of(roles: &[String]) -> Option<Self> {
        match roles {
            [] => None,
            [role] if role == ANY_ROLE => None,
            [role] => Some(Self::Equals(role.clone())),
            roles => Some(Self::OneOf(roles.to_vec()))
        }
    }
}

/// Authorization checks at one point of the dispatcher.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Guards {
    /// Reject requests without a logged user.
    pub logged_user: bool,

    /// Reject requests with a logged user.
    pub anonymous: bool,

    /// Reject users whose role fails this test.
    pub allowed: Option<RoleTest>,

    /// Reject users whose role passes this test.
    pub rejected: Option<RoleTest>
}

impl Guards {
    /// Check if no check is emitted.
    pub fn is_empty(&self) -> bool {
        !self.logged_user && !self.anonymous && self.allowed.is_none() && self.rejected.is_none()
    }

    /// Check if the user role is consulted.
    pub fn needs_role(&self) -> bool {
        self.allowed.is_some() || self.rejected.is_some()
    }
}

/// Which concerns were hoisted for a verb.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hoisting {
    /// Logged-user guard hoisted.
    pub logged_user: bool,

    /// Anonymous guard hoisted.
    pub anonymous: bool,

    /// Allowed-role guard hoisted.
    pub allowed: bool,

    /// Rejected-role guard hoisted.
    pub rejected: bool
}

impl Hoisting {
    /// Decide hoisting for the routes of one verb.
    pub fn decide(routes: &[&Route]) -> Self {
        let Some(first) = routes.first() else {
            return Self::default();
        };
        let first = &first.authorization;
        Self {
            logged_user: routes.iter().all(|r| r.authorization.requires_logged_user),
            anonymous:   routes.iter().all(|r| r.authorization.requires_anonymous),
            allowed:     routes
                .iter()
                .all(|r| r.authorization.allowed_roles == first.allowed_roles),
            rejected:    routes
                .iter()
                .all(|r| r.authorization.rejected_roles == first.rejected_roles)
        }
    }
}

/// Where a route finds its matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatcherRef {
    /// The shared index matcher.
    Index,

    /// Slot in the endpoint matcher array.
    Slot(usize)
}

/// One branch of the match chain.
#[derive(Debug)]
pub struct Branch<'a> {
    /// Route served by the branch.
    pub route: &'a Route,

    /// Matcher probed by the branch.
    pub matcher: MatcherRef,

    /// Checks run after the match, before the handler.
    pub guards: Guards
}

/// Dispatcher of one verb.
#[derive(Debug)]
pub struct VerbPlan<'a> {
    /// Verb handled.
    pub verb: HttpVerb,

    /// Checks run before any matching.
    pub hoisted: Guards,

    /// Match chain in declaration order.
    pub branches: Vec<Branch<'a>>,

    /// Emit the development CORS header.
    pub development: bool
}

impl VerbPlan<'_> {
    /// Check if any guard needs the current user.
    pub fn needs_user(&self) -> bool {
        !self.hoisted.is_empty() || self.branches.iter().any(|b| !b.guards.is_empty())
    }

    /// Check if any guard needs the current user's role.
    pub fn needs_role(&self) -> bool {
        self.hoisted.needs_role() || self.branches.iter().any(|b| b.guards.needs_role())
    }
}

/// Dispatchers of every verb plus the shared matchers.
#[derive(Debug)]
pub struct DispatchPlan<'a> {
    /// One route per distinct non-index template, indexed by [`MatcherRef::Slot`].
    pub matchers: Vec<&'a Route>,

    /// One plan per verb, in [`HttpVerb::ALL`] order.
    pub verbs: Vec<VerbPlan<'a>>
}

impl<'a> DispatchPlan<'a> {
    /// Plan dispatch for a route table.
    pub fn build(table: &'a RouteTable, development: bool) -> Self {
        let matchers = table.matchers();

        let verbs = HttpVerb::ALL
            .into_iter()
            .map(|verb| plan_verb(verb, &table.routes_for(verb), &matchers, development))
            .collect();

        Self {
            matchers,
            verbs
        }
    }
}

fn plan_verb<'a>(
    verb: HttpVerb,
    routes: &[&'a Route],
    matchers: &[&'a Route],
    development: bool
) -> VerbPlan<'a> {
    let hoisting = Hoisting::decide(routes);

    let hoisted = match routes.first() {
        Some(first) => Guards {
            logged_user: hoisting.logged_user,
            anonymous:   hoisting.anonymous,
            allowed:     hoisting
                .allowed
                .then(|| RoleTest::of(&first.authorization.allowed_roles))
                .flatten(),
            rejected:    hoisting
                .rejected
                .then(|| RoleTest::of(&first.authorization.rejected_roles))
                .flatten()
        },
        None => Guards::default()
    };

    let branches = routes
        .iter()
        .map(|route| {
            let auth = &route.authorization;
            Branch {
                route,
                matcher: matcher_ref(route, matchers),
                guards: Guards {
                    logged_user: !hoisting.logged_user && auth.requires_logged_user,
                    anonymous:   !hoisting.anonymous && auth.requires_anonymous,
                    allowed:     (!hoisting.allowed)
                        .then(|| RoleTest::of(&auth.allowed_roles))
                        .flatten(),
                    rejected:    (!hoisting.rejected)
                        .then(|| RoleTest::of(&auth.rejected_roles))
                        .flatten()
                }
            }
        })
        .collect();

    VerbPlan {
        verb,
        hoisted,
        branches,
        development
    }
}

fn matcher_ref(route: &Route, matchers: &[&Route]) -> MatcherRef {
    if route.is_index() {
        return MatcherRef::Index;
    }
    matchers
        .iter()
        .position(|known| known.pattern == route.pattern)
        .map_or(MatcherRef::Index, MatcherRef::Slot)
}

#[cfg(test)]
mod tests;
