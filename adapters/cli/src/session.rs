//! Per-frame simulation pump composing the world with its systems.

use std::time::Duration;

use outlands_core::{Command, Event};
use outlands_system_combat::{Combat, Config as CombatConfig};
use outlands_system_hostile_ai::{Config as AiConfig, HostileAi};
use outlands_system_progression::Progression;
use outlands_world::{self as world, query, World};

use crate::script::FrameInput;

/// One full game session: the authoritative world plus the systems that
/// drive it.
pub(crate) struct Session {
    world: World,
    hostile_ai: HostileAi,
    combat: Combat,
    progression: Progression,
}

impl Session {
    /// Creates a session from the world seed and the two gameplay RNG seeds.
    pub(crate) fn new(world_seed: u32, ai_seed: u64, loot_seed: u64) -> Self {
        Self {
            world: World::new(world_seed),
            hostile_ai: HostileAi::new(AiConfig::new(ai_seed)),
            combat: Combat::new(CombatConfig::new(loot_seed)),
            progression: Progression::new(),
        }
    }

    /// Read-only access to the underlying world for queries.
    pub(crate) fn world(&self) -> &World {
        &self.world
    }

    /// Runs one tick: the input commands, the clock advance, then the
    /// systems until no further commands are produced. Returns every event
    /// the frame generated, in order.
    pub(crate) fn frame(&mut self, input: FrameInput, dt: Duration) -> Vec<Event> {
        let mut log = Vec::new();
        let mut events = Vec::new();

        world::apply(
            &mut self.world,
            Command::SetPlayerMovement {
                intent: input.intent,
            },
            &mut events,
        );
        if input.attack {
            world::apply(&mut self.world, Command::PlayerAttack, &mut events);
        }
        if input.interact {
            world::apply(&mut self.world, Command::Interact, &mut events);
        }
        world::apply(&mut self.world, Command::Tick { dt }, &mut events);
        log.extend(events.iter().cloned());

        loop {
            let prowlers = query::prowler_view(&self.world);
            let sentinel = query::sentinel(&self.world);
            let player = query::player(&self.world);
            let clock = query::clock(&self.world);

            let mut commands = Vec::new();
            self.combat
                .handle(&events, &prowlers, &sentinel, &mut commands);
            self.hostile_ai
                .handle(&events, &prowlers, &sentinel, &player, clock, &mut commands);
            self.progression.handle(&events, &mut commands);

            if commands.is_empty() {
                break;
            }

            events.clear();
            for command in commands {
                let mut generated = Vec::new();
                world::apply(&mut self.world, command, &mut generated);
                log.extend(generated.iter().cloned());
                events.extend(generated);
            }
        }

        log
    }
}
