use super::{ActorKind, ActorState, EntityId};

/// Every actor of the session, dead ones included.
///
/// Identifiers are handed out sequentially and never reused. Dead actors stay
/// in the list so late references (a second attack on a corpse) resolve to a
/// dead actor rather than to nothing.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct EntitiesState {
    actors: Vec<ActorState>,
    player: Option<EntityId>,
    next_id: u32,
}

impl EntitiesState {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Reserves the next identifier.
    pub fn allocate_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Default name for an actor created with `id`: `Player`, or
    /// `Creature<N>` where `N` counts every actor created so far.
    pub fn default_name(kind: ActorKind, id: EntityId) -> String {
        match kind {
            ActorKind::Player => "Player".to_owned(),
            ActorKind::Creature => format!("Creature{}", id.0 + 1),
        }
    }

    pub fn insert(&mut self, actor: ActorState) {
        if actor.is_player() {
            self.player = Some(actor.id);
        }
        self.actors.push(actor);
    }

    pub fn actor(&self, id: EntityId) -> Option<&ActorState> {
        self.actors.iter().find(|actor| actor.id == id)
    }

    pub fn actor_mut(&mut self, id: EntityId) -> Option<&mut ActorState> {
        self.actors.iter_mut().find(|actor| actor.id == id)
    }

    pub fn player_id(&self) -> Option<EntityId> {
        self.player
    }

    pub fn player(&self) -> Option<&ActorState> {
        self.player.and_then(|id| self.actor(id))
    }

    pub fn all_actors(&self) -> impl Iterator<Item = &ActorState> {
        self.actors.iter()
    }

    pub fn all_actors_mut(&mut self) -> impl Iterator<Item = &mut ActorState> {
        self.actors.iter_mut()
    }

    pub fn living_actors(&self) -> impl Iterator<Item = &ActorState> {
        self.actors.iter().filter(|actor| actor.is_alive())
    }

    /// True while any actor is still animating a step.
    pub fn any_moving(&self) -> bool {
        self.actors.iter().any(ActorState::is_moving)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creature_names_count_every_actor() {
        let mut entities = EntitiesState::empty();
        let player = entities.allocate_id();
        let first = entities.allocate_id();
        assert_eq!(EntitiesState::default_name(ActorKind::Player, player), "Player");
        assert_eq!(
            EntitiesState::default_name(ActorKind::Creature, first),
            "Creature2"
        );
    }
}
