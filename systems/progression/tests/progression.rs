use std::time::Duration;

use outlands_core::{tuning, CellCoord, Command, Event, MoveIntent, TileKind};
use outlands_system_progression::Progression;
use outlands_world::map::{CollisionGrid, MapData, TileGrid};
use outlands_world::{self as world, query, World};

const FRAME: Duration = Duration::from_millis(200);

#[test]
fn collecting_the_final_relic_wakes_the_sentinel_once() {
    // Twelve relics in a row; the player sweeps east, collecting as it goes.
    let relic_cells: Vec<CellCoord> = (0..tuning::RELIC_COUNT)
        .map(|index| CellCoord::new(4 + index, 5))
        .collect();
    let map = MapData::new(
        TileGrid::filled(20, 20, TileKind::Grass),
        CollisionGrid::open(20, 20),
        relic_cells,
        Vec::new(),
        CellCoord::new(4, 5),
        CellCoord::new(19, 19),
    );
    let mut world = World::from_map(map);
    let mut system = Progression::new();

    let mut activations = 0;
    for _ in 0..20 {
        let events = frame(&mut world, &mut system);
        activations += events
            .iter()
            .filter(|event| matches!(event, Event::SentinelActivated))
            .count();
    }

    assert_eq!(query::collected_count(&world), tuning::RELIC_COUNT);
    assert_eq!(activations, 1, "the sentinel wakes exactly once");
    assert!(query::sentinel(&world).active);

    // Interacting again changes nothing.
    let extra = frame(&mut world, &mut system);
    assert!(extra
        .iter()
        .all(|event| !matches!(event, Event::SentinelActivated)));
}

fn frame(world: &mut World, system: &mut Progression) -> Vec<Event> {
    let mut log = Vec::new();
    let mut events = Vec::new();
    world::apply(world, Command::Interact, &mut events);
    world::apply(
        world,
        Command::SetPlayerMovement {
            intent: MoveIntent {
                right: true,
                ..MoveIntent::none()
            },
        },
        &mut events,
    );
    world::apply(world, Command::Tick { dt: FRAME }, &mut events);
    log.extend(events.iter().cloned());

    loop {
        let mut commands = Vec::new();
        system.handle(&events, &mut commands);

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
