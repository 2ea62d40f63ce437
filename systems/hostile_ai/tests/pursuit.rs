use std::time::Duration;

use outlands_core::{CellCoord, Command, Event, MoveIntent, Outcome, TileKind};
use outlands_system_hostile_ai::{Config, HostileAi};
use outlands_world::map::{CollisionGrid, MapData, TileGrid};
use outlands_world::{self as world, query, World};

const FRAME: Duration = Duration::from_millis(100);

#[test]
fn chasing_prowler_wears_the_player_down() {
    let map = MapData::new(
        TileGrid::filled(20, 20, TileKind::Grass),
        CollisionGrid::open(20, 20),
        Vec::new(),
        vec![CellCoord::new(6, 5)],
        CellCoord::new(5, 5),
        CellCoord::new(19, 19),
    );
    let mut world = World::from_map(map);
    let mut system = HostileAi::new(Config::new(0x0ff_1ce));

    let mut damage_events = 0;
    let mut defeat_events = 0;
    for _ in 0..120 {
        let events = frame(&mut world, &mut system);
        for event in &events {
            match event {
                Event::PlayerDamaged { .. } => damage_events += 1,
                Event::Defeat => defeat_events += 1,
                _ => {}
            }
        }
        if query::outcome(&world) != Outcome::Ongoing {
            break;
        }
    }

    assert_eq!(query::outcome(&world), Outcome::Defeat);
    assert_eq!(defeat_events, 1, "defeat is signaled exactly once");
    assert_eq!(damage_events as u32, outlands_core::tuning::PLAYER_MAX_HEALTH);
    assert_eq!(query::player(&world).health, 0);

    // A finished session stays inert.
    assert!(frame(&mut world, &mut system).is_empty());
}

fn frame(world: &mut World, system: &mut HostileAi) -> Vec<Event> {
    let mut log = Vec::new();
    let mut events = Vec::new();
    world::apply(
        world,
        Command::SetPlayerMovement {
            intent: MoveIntent::none(),
        },
        &mut events,
    );
    world::apply(world, Command::Tick { dt: FRAME }, &mut events);
    log.extend(events.iter().cloned());

    loop {
        let prowlers = query::prowler_view(world);
        let sentinel = query::sentinel(world);
        let player = query::player(world);
        let clock = query::clock(world);
        let mut commands = Vec::new();
        system.handle(&events, &prowlers, &sentinel, &player, clock, &mut commands);

        if commands.is_empty() {
            break;
        }

        events.clear();
        for command in commands {
            let mut generated = Vec::new();
            world::apply(world, command, &mut generated);
            log.extend(generated.iter().cloned());
            events.extend(generated);
        }
    }

    log
}
