// SPDX-FileCopyrightText: 2026 Networking SFC Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory SFC plugin for deterministic testing.
//!
//! `MockSfcPlugin` keeps resources in hash maps and records every call. It
//! scopes resources to the caller's tenant (admins see everything) and
//! refuses to delete port pairs or groups that are still referenced. It does
//! not check hosts, chain id collisions, or flow classifier ownership.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use sfc_api::apply_list_query;
use sfc_core::{
    ListQuery, PortChain, PortChainCreate, PortChainUpdate, PortPair, PortPairCreate,
    PortPairGroup, PortPairGroupCreate, PortPairGroupUpdate, PortPairUpdate, RequestContext,
    Resource, SfcError, SfcPlugin,
};
use tokio::sync::Mutex;
use tracing::debug;
use uuid::Uuid;

#[derive(Default)]
struct MockState {
    port_pairs: HashMap<Uuid, PortPair>,
    port_pair_groups: HashMap<Uuid, PortPairGroup>,
    port_chains: HashMap<Uuid, PortChain>,
    next_group_id: u32,
    calls: Vec<String>,
}

/// A mock SFC plugin backed by memory.
pub struct MockSfcPlugin {
    state: Arc<Mutex<MockState>>,
    aliases: Vec<String>,
}

impl MockSfcPlugin {
    /// Create an empty plugin advertising the `sfc` alias.
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(MockState::default())),
            aliases: vec![sfc_core::SFC_EXT.to_string()],
        }
    }

    /// Create a plugin advertising the given extension aliases instead.
    pub fn with_aliases(aliases: Vec<String>) -> Self {
        Self {
            aliases,
            ..Self::new()
        }
    }

    /// Names of the operations called so far, in order.
    pub async fn calls(&self) -> Vec<String> {
        self.state.lock().await.calls.clone()
    }

    async fn record(&self, call: &str) -> tokio::sync::MutexGuard<'_, MockState> {
        let mut state = self.state.lock().await;
        state.calls.push(call.to_string());
        debug!(call, "mock sfc plugin call");
        state
    }
}

impl Default for MockSfcPlugin {
    fn default() -> Self {
        Self::new()
    }
}

fn visible(context: &RequestContext, tenant_id: &str) -> bool {
    context.is_admin || context.tenant_id == tenant_id
}

#[async_trait]
impl SfcPlugin for MockSfcPlugin {
    fn supported_extension_aliases(&self) -> Vec<String> {
        self.aliases.clone()
    }

    async fn create_port_chain(
        &self,
        context: &RequestContext,
        port_chain: PortChainCreate,
    ) -> Result<PortChain, SfcError> {
        let mut state = self.record("create_port_chain").await;
        for group in &port_chain.port_pair_groups {
            if !state
                .port_pair_groups
                .get(group)
                .is_some_and(|g| visible(context, &g.tenant_id))
            {
                return Err(SfcError::PortPairGroupNotFound { id: *group });
            }
        }
        let chain = port_chain.into_port_chain(Uuid::new_v4());
        state.port_chains.insert(chain.id, chain.clone());
        Ok(chain)
    }

    async fn update_port_chain(
        &self,
        context: &RequestContext,
        id: Uuid,
        port_chain: PortChainUpdate,
    ) -> Result<PortChain, SfcError> {
        let mut state = self.record("update_port_chain").await;
        let chain = state
            .port_chains
            .get_mut(&id)
            .filter(|c| visible(context, &c.tenant_id))
            .ok_or(SfcError::PortChainNotFound { id })?;
        chain.apply(port_chain);
        Ok(chain.clone())
    }

    async fn delete_port_chain(&self, context: &RequestContext, id: Uuid) -> Result<(), SfcError> {
        let mut state = self.record("delete_port_chain").await;
        if !state
            .port_chains
            .get(&id)
            .is_some_and(|c| visible(context, &c.tenant_id))
        {
            return Err(SfcError::PortChainNotFound { id });
        }
        state.port_chains.remove(&id);
        Ok(())
    }

    async fn get_port_chains(
        &self,
        context: &RequestContext,
        query: &ListQuery,
    ) -> Result<Vec<PortChain>, SfcError> {
        let state = self.record("get_port_chains").await;
        let items = state
            .port_chains
            .values()
            .filter(|c| visible(context, &c.tenant_id))
            .cloned()
            .collect();
        apply_list_query(Resource::PortChain, items, query, |c| c.id)
    }

    async fn get_port_chain(
        &self,
        context: &RequestContext,
        id: Uuid,
        _fields: Option<&[String]>,
    ) -> Result<PortChain, SfcError> {
        let state = self.record("get_port_chain").await;
        state
            .port_chains
            .get(&id)
            .filter(|c| visible(context, &c.tenant_id))
            .cloned()
            .ok_or(SfcError::PortChainNotFound { id })
    }

    async fn create_port_pair_group(
        &self,
        context: &RequestContext,
        port_pair_group: PortPairGroupCreate,
    ) -> Result<PortPairGroup, SfcError> {
        let mut state = self.record("create_port_pair_group").await;
        for pair in &port_pair_group.port_pairs {
            if !state
                .port_pairs
                .get(pair)
                .is_some_and(|p| visible(context, &p.tenant_id))
            {
                return Err(SfcError::PortPairNotFound { id: *pair });
            }
        }
        state.next_group_id += 1;
        let group = port_pair_group.into_port_pair_group(Uuid::new_v4(), Some(state.next_group_id));
        state.port_pair_groups.insert(group.id, group.clone());
        Ok(group)
    }

    async fn update_port_pair_group(
        &self,
        context: &RequestContext,
        id: Uuid,
        port_pair_group: PortPairGroupUpdate,
    ) -> Result<PortPairGroup, SfcError> {
        let mut state = self.record("update_port_pair_group").await;
        let group = state
            .port_pair_groups
            .get_mut(&id)
            .filter(|g| visible(context, &g.tenant_id))
            .ok_or(SfcError::PortPairGroupNotFound { id })?;
        group.apply(port_pair_group);
        Ok(group.clone())
    }

    async fn delete_port_pair_group(
        &self,
        context: &RequestContext,
        id: Uuid,
    ) -> Result<(), SfcError> {
        let mut state = self.record("delete_port_pair_group").await;
        if !state
            .port_pair_groups
            .get(&id)
            .is_some_and(|g| visible(context, &g.tenant_id))
        {
            return Err(SfcError::PortPairGroupNotFound { id });
        }
        if state
            .port_chains
            .values()
            .any(|c| c.port_pair_groups.contains(&id))
        {
            return Err(SfcError::PortPairGroupInUse { id });
        }
        state.port_pair_groups.remove(&id);
        Ok(())
    }

    async fn get_port_pair_groups(
        &self,
        context: &RequestContext,
        query: &ListQuery,
    ) -> Result<Vec<PortPairGroup>, SfcError> {
        let state = self.record("get_port_pair_groups").await;
        let items = state
            .port_pair_groups
            .values()
            .filter(|g| visible(context, &g.tenant_id))
            .cloned()
            .collect();
        apply_list_query(Resource::PortPairGroup, items, query, |g| g.id)
    }

    async fn get_port_pair_group(
        &self,
        context: &RequestContext,
        id: Uuid,
        _fields: Option<&[String]>,
    ) -> Result<PortPairGroup, SfcError> {
        let state = self.record("get_port_pair_group").await;
        state
            .port_pair_groups
            .get(&id)
            .filter(|g| visible(context, &g.tenant_id))
            .cloned()
            .ok_or(SfcError::PortPairGroupNotFound { id })
    }

    async fn create_port_pair(
        &self,
        _context: &RequestContext,
        port_pair: PortPairCreate,
    ) -> Result<PortPair, SfcError> {
        let mut state = self.record("create_port_pair").await;
        let pair = port_pair.into_port_pair(Uuid::new_v4());
        state.port_pairs.insert(pair.id, pair.clone());
        Ok(pair)
    }

    async fn update_port_pair(
        &self,
        context: &RequestContext,
        id: Uuid,
        port_pair: PortPairUpdate,
    ) -> Result<PortPair, SfcError> {
        let mut state = self.record("update_port_pair").await;
        let pair = state
            .port_pairs
            .get_mut(&id)
            .filter(|p| visible(context, &p.tenant_id))
            .ok_or(SfcError::PortPairNotFound { id })?;
        pair.apply(port_pair);
        Ok(pair.clone())
    }

    async fn delete_port_pair(&self, context: &RequestContext, id: Uuid) -> Result<(), SfcError> {
        let mut state = self.record("delete_port_pair").await;
        if !state
            .port_pairs
            .get(&id)
            .is_some_and(|p| visible(context, &p.tenant_id))
        {
            return Err(SfcError::PortPairNotFound { id });
        }
        if state
            .port_pair_groups
            .values()
            .any(|g| g.port_pairs.contains(&id))
        {
            return Err(SfcError::PortPairInUse { id });
        }
        state.port_pairs.remove(&id);
        Ok(())
    }

    async fn get_port_pairs(
        &self,
        context: &RequestContext,
        query: &ListQuery,
    ) -> Result<Vec<PortPair>, SfcError> {
        let state = self.record("get_port_pairs").await;
        let items = state
            .port_pairs
            .values()
            .filter(|p| visible(context, &p.tenant_id))
            .cloned()
            .collect();
        apply_list_query(Resource::PortPair, items, query, |p| p.id)
    }

    async fn get_port_pair(
        &self,
        context: &RequestContext,
        id: Uuid,
        _fields: Option<&[String]>,
    ) -> Result<PortPair, SfcError> {
        let state = self.record("get_port_pair").await;
        state
            .port_pairs
            .get(&id)
            .filter(|p| visible(context, &p.tenant_id))
            .cloned()
            .ok_or(SfcError::PortPairNotFound { id })
    }
}
