use crate::api::{ApiClient, ApiResult};
use crate::models::Role;
use std::collections::HashSet;
use uuid::Uuid;

/// Where a role came from. Global roles are shared, read-only presets and
/// force their own generation parameter profile; personal roles belong to the
/// current user and are fully editable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoleOrigin {
    Global,
    Personal,
}

/// Merged view over the two role populations, global entries first. Origin is
/// recorded as membership in the global result set at merge time, never read
/// from a payload field, since downstream validation keys off it.
#[derive(Debug)]
pub struct RoleCatalog {
    roles: Vec<Role>,
    global_ids: HashSet<Uuid>,
}

impl RoleCatalog {
    /// Fetches both populations through the dispatcher and merges them.
    /// Either fetch failing aborts the load; partial catalogs are never
    /// returned.
    pub async fn load(client: &ApiClient) -> ApiResult<Self> {
        let (global, personal) =
            futures::try_join!(client.global_roles(), client.personal_roles())?;
        log::info!(
            "Loaded role catalog: {} global, {} personal",
            global.data.len(),
            personal.data.len()
        );
        Ok(Self::from_parts(global.data, personal.data))
    }

    pub fn from_parts(global: Vec<Role>, personal: Vec<Role>) -> Self {
        // The id-set must be taken before the merge is consumed; an id
        // colliding across the two sources is backend misbehavior and stays
        // undefined here.
        let global_ids = global.iter().map(|role| role.id).collect();
        let mut roles = global;
        roles.extend(personal);
        Self { roles, global_ids }
    }

    /// All roles, global-first, in backend order within each population.
    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    pub fn get(&self, id: Uuid) -> Option<&Role> {
        self.roles.iter().find(|role| role.id == id)
    }

    /// Origin of a catalog entry; `None` for ids not in the catalog.
    pub fn origin(&self, id: Uuid) -> Option<RoleOrigin> {
        if self.global_ids.contains(&id) {
            Some(RoleOrigin::Global)
        } else if self.roles.iter().any(|role| role.id == id) {
            Some(RoleOrigin::Personal)
        } else {
            None
        }
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }
}
