//! Integration tests for pandemic-sim.

use pandemic_agent::{AgentRngs, AgentSeed, Population, PopulationBuilder};
use pandemic_core::{Arena, SimConfig, Status, Tick};
use pandemic_engine::{AggregateCounts, DiseaseConfig, EpidemicTracker};

use crate::{NoopObserver, SimBuilder, SimObserver};

// ── Helpers ───────────────────────────────────────────────────────────────────

const ARENA: Arena = Arena {
    width: 640.0,
    height: 480.0,
};

fn test_config(total_ticks: u64) -> SimConfig {
    SimConfig {
        start_unix_secs: 0,
        tick_duration_secs: 1,
        total_ticks,
        seed: 42,
        output_interval_ticks: 1,
    }
}

fn disease(sick_p: f64, death_p: f64, healing: u64) -> DiseaseConfig {
    DiseaseConfig {
        sick_probability: sick_p,
        death_probability: death_p,
        healing_duration_ticks: healing,
    }
}

fn still_agent(x: f64, y: f64, status: Status) -> AgentSeed {
    AgentSeed {
        x,
        y,
        heading_deg: 0.0,
        speed: 0.0,
        radius: 4.0,
        status,
    }
}

/// Four stationary agents in a line, each overlapping only its neighbours.
fn chain(statuses: [Status; 4]) -> (Population, AgentRngs) {
    let mut builder = PopulationBuilder::new(ARENA, 42);
    for (i, status) in statuses.into_iter().enumerate() {
        builder = builder.agent(still_agent(100.0 + 6.0 * i as f64, 100.0, status));
    }
    builder.build().unwrap()
}

// ── SimBuilder validation ─────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;
    use crate::SimError;

    #[test]
    fn builds_successfully() {
        let (pop, rngs) = chain([Status::Sick, Status::Healthy, Status::Healthy, Status::Healthy]);
        let sim = SimBuilder::new(test_config(10), ARENA, disease(1.0, 0.0, 10), pop, rngs)
            .build()
            .unwrap();
        assert_eq!(sim.population.len(), 4);
        assert_eq!(
            sim.tracker.snapshot(),
            AggregateCounts {
                healthy: 3,
                sick: 1,
                cured: 0,
                dead: 0
            }
        );
        assert_eq!(sim.tracker.population_size(), 4);
    }

    #[test]
    fn rng_count_mismatch_errors() {
        let (pop, _) = chain([Status::Healthy; 4]);
        let (_, other_rngs) = PopulationBuilder::new(ARENA, 42)
            .agent(still_agent(50.0, 50.0, Status::Healthy))
            .build()
            .unwrap();
        let result =
            SimBuilder::new(test_config(10), ARENA, disease(1.0, 0.0, 10), pop, other_rngs).build();
        assert!(matches!(
            result,
            Err(SimError::AgentCountMismatch {
                expected: 4,
                got: 1
            })
        ));
    }

    #[test]
    fn invalid_disease_config_errors() {
        let (pop, rngs) = chain([Status::Healthy; 4]);
        let result =
            SimBuilder::new(test_config(10), ARENA, disease(1.5, 0.0, 10), pop, rngs).build();
        assert!(matches!(result, Err(SimError::Config(_))));
    }

    #[test]
    fn invalid_arena_errors() {
        let (pop, rngs) = chain([Status::Healthy; 4]);
        let result = SimBuilder::new(
            test_config(10),
            Arena::new(0.0, 480.0),
            disease(1.0, 0.0, 10),
            pop,
            rngs,
        )
        .build();
        assert!(matches!(result, Err(SimError::Config(_))));
    }
}

// ── Basic run ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use super::*;

    #[test]
    fn run_advances_clock_to_end_tick() {
        let (pop, rngs) = chain([Status::Healthy; 4]);
        let mut sim = SimBuilder::new(test_config(10), ARENA, disease(0.0, 0.0, 10), pop, rngs)
            .build()
            .unwrap();
        sim.run(&mut NoopObserver);
        assert_eq!(sim.clock.current_tick, Tick(10));
    }

    #[test]
    fn run_ticks_advances_incrementally() {
        let (pop, rngs) = chain([Status::Healthy; 4]);
        let mut sim = SimBuilder::new(test_config(100), ARENA, disease(0.0, 0.0, 10), pop, rngs)
            .build()
            .unwrap();
        sim.run_ticks(5, &mut NoopObserver);
        assert_eq!(sim.clock.current_tick, Tick(5));
        sim.run_ticks(3, &mut NoopObserver);
        assert_eq!(sim.clock.current_tick, Tick(8));
    }

    /// Observer that counts hook invocations.
    struct HookCounter {
        starts: usize,
        ends: usize,
        snapshots: usize,
        sim_ends: usize,
    }

    impl SimObserver for HookCounter {
        fn on_tick_start(&mut self, _t: Tick) {
            self.starts += 1;
        }
        fn on_tick_end(&mut self, _t: Tick, _c: AggregateCounts) {
            self.ends += 1;
        }
        fn on_snapshot(&mut self, _t: Tick, _p: &Population, _tr: &EpidemicTracker) {
            self.snapshots += 1;
        }
        fn on_sim_end(&mut self, _t: Tick, _p: &Population, _tr: &EpidemicTracker) {
            self.sim_ends += 1;
        }
    }

    #[test]
    fn observer_called_correct_number_of_times() {
        let (pop, rngs) = chain([Status::Healthy; 4]);
        let mut config = test_config(6);
        config.output_interval_ticks = 2;
        let mut sim = SimBuilder::new(config, ARENA, disease(0.0, 0.0, 10), pop, rngs)
            .build()
            .unwrap();

        let mut obs = HookCounter {
            starts: 0,
            ends: 0,
            snapshots: 0,
            sim_ends: 0,
        };
        sim.run(&mut obs);
        assert_eq!(obs.starts, 6);
        assert_eq!(obs.ends, 6);
        assert_eq!(obs.snapshots, 3, "snapshots at ticks 0, 2, 4");
        assert_eq!(obs.sim_ends, 1);
    }
}

// ── Epidemic scenarios ────────────────────────────────────────────────────────

#[cfg(test)]
mod scenario_tests {
    use super::*;

    #[test]
    fn certain_contact_infects_in_one_tick() {
        let (pop, rngs) = PopulationBuilder::new(ARENA, 42)
            .agent(AgentSeed {
                x: 0.0,
                y: 0.0,
                heading_deg: 0.0,
                speed: 0.0,
                radius: 5.0,
                status: Status::Healthy,
            })
            .agent(AgentSeed {
                x: 3.0,
                y: 0.0,
                heading_deg: 0.0,
                speed: 0.0,
                radius: 5.0,
                status: Status::Sick,
            })
            .build()
            .unwrap();
        let mut sim = SimBuilder::new(test_config(10), ARENA, disease(1.0, 0.0, 100), pop, rngs)
            .build()
            .unwrap();

        sim.run_ticks(1, &mut NoopObserver);
        assert_eq!(sim.population.status[0], Status::Sick);
        assert_eq!(sim.population.infected_at[0], Some(Tick(0)));
        let counts = sim.tracker.snapshot();
        assert_eq!(counts.healthy, 0);
        assert_eq!(counts.sick, 2);
    }

    #[test]
    fn infection_sweeps_forward_in_processing_order() {
        // The seed is first in the order, so each later agent already sees
        // its moved-and-infected neighbour within the same tick: the whole
        // chain catches it in one tick.
        let (pop, rngs) = chain([Status::Sick, Status::Healthy, Status::Healthy, Status::Healthy]);
        let mut sim = SimBuilder::new(test_config(10), ARENA, disease(1.0, 0.0, 100), pop, rngs)
            .build()
            .unwrap();

        sim.run_ticks(1, &mut NoopObserver);
        assert_eq!(sim.population.status, vec![Status::Sick; 4]);
        assert_eq!(sim.tracker.snapshot().sick, 4);
    }

    #[test]
    fn infection_crawls_backward_one_hop_per_tick() {
        // The seed is last in the order, so agents ahead of it in the scan
        // still see their other neighbour un-infected when they advance:
        // the infection front moves exactly one agent per tick.
        let (pop, rngs) = chain([Status::Healthy, Status::Healthy, Status::Healthy, Status::Sick]);
        let mut sim = SimBuilder::new(test_config(10), ARENA, disease(1.0, 0.0, 100), pop, rngs)
            .build()
            .unwrap();

        sim.run_ticks(1, &mut NoopObserver);
        assert_eq!(
            sim.population.status,
            vec![Status::Healthy, Status::Healthy, Status::Sick, Status::Sick]
        );

        sim.run_ticks(1, &mut NoopObserver);
        assert_eq!(
            sim.population.status,
            vec![Status::Healthy, Status::Sick, Status::Sick, Status::Sick]
        );

        sim.run_ticks(1, &mut NoopObserver);
        assert_eq!(sim.population.status, vec![Status::Sick; 4]);
    }

    #[test]
    fn lone_sick_agent_cures() {
        let (pop, rngs) = PopulationBuilder::new(ARENA, 42)
            .agent(still_agent(320.0, 240.0, Status::Sick))
            .build()
            .unwrap();
        let mut sim = SimBuilder::new(test_config(20), ARENA, disease(1.0, 0.0, 10), pop, rngs)
            .build()
            .unwrap();

        sim.run(&mut NoopObserver);
        assert_eq!(sim.population.status[0], Status::Cured);
        let counts = sim.tracker.snapshot();
        assert_eq!(counts.cured, 1);
        assert_eq!(counts.sick, 0);
        // Resolution happens on the first tick strictly past the duration.
        assert_eq!(sim.tracker.history(Status::Cured)[0].tick, Tick(11));
    }

    #[test]
    fn dead_agent_stays_frozen_for_the_rest_of_the_run() {
        let mut moving = still_agent(320.0, 240.0, Status::Sick);
        moving.speed = 3.0;
        moving.heading_deg = 30.0;
        let (pop, rngs) = PopulationBuilder::new(ARENA, 42).agent(moving).build().unwrap();
        let mut sim = SimBuilder::new(test_config(20), ARENA, disease(1.0, 1.0, 2), pop, rngs)
            .build()
            .unwrap();

        sim.run(&mut NoopObserver);
        assert_eq!(sim.population.status[0], Status::Dead);

        let (x, y) = (sim.population.x[0], sim.population.y[0]);
        sim.run_ticks(10, &mut NoopObserver);
        assert_eq!(sim.population.x[0], x);
        assert_eq!(sim.population.y[0], y);
        assert_eq!(sim.population.status[0], Status::Dead);
    }

    #[test]
    fn counts_sum_to_population_size_every_tick() {
        struct SumChecker {
            population_size: usize,
        }
        impl SimObserver for SumChecker {
            fn on_tick_end(&mut self, tick: Tick, counts: AggregateCounts) {
                assert_eq!(
                    counts.total(),
                    self.population_size,
                    "counts must sum to population size at {tick}"
                );
            }
        }

        let (pop, rngs) = chain([Status::Sick, Status::Healthy, Status::Healthy, Status::Healthy]);
        let mut sim = SimBuilder::new(test_config(40), ARENA, disease(0.5, 0.5, 3), pop, rngs)
            .build()
            .unwrap();
        sim.run(&mut SumChecker { population_size: 4 });
    }

    #[test]
    fn status_sequences_only_follow_legal_edges() {
        struct SequenceRecorder {
            per_agent: Vec<Vec<Status>>,
        }
        impl SimObserver for SequenceRecorder {
            fn on_snapshot(&mut self, _t: Tick, pop: &Population, _tr: &EpidemicTracker) {
                for (i, &s) in pop.status.iter().enumerate() {
                    self.per_agent[i].push(s);
                }
            }
        }

        let (pop, rngs) = chain([Status::Sick, Status::Healthy, Status::Healthy, Status::Healthy]);
        let mut sim = SimBuilder::new(test_config(60), ARENA, disease(0.5, 0.5, 3), pop, rngs)
            .build()
            .unwrap();
        let mut obs = SequenceRecorder {
            per_agent: vec![Vec::new(); 4],
        };
        sim.run(&mut obs);

        for (i, seq) in obs.per_agent.iter().enumerate() {
            for pair in seq.windows(2) {
                let (a, b) = (pair[0], pair[1]);
                assert!(
                    a == b || a.may_transition_to(b),
                    "agent {i}: illegal sequence {a} -> {b}"
                );
            }
        }
    }

    #[test]
    fn same_seed_reproduces_the_run_exactly() {
        let run = || {
            let (pop, rngs) = chain([Status::Sick, Status::Healthy, Status::Healthy, Status::Healthy]);
            let mut sim =
                SimBuilder::new(test_config(50), ARENA, disease(0.4, 0.5, 4), pop, rngs)
                    .build()
                    .unwrap();
            sim.run(&mut NoopObserver);
            sim
        };

        let a = run();
        let b = run();
        assert_eq!(a.population.status, b.population.status);
        assert_eq!(a.population.x, b.population.x);
        assert_eq!(a.population.y, b.population.y);
        assert_eq!(a.tracker.snapshot(), b.tracker.snapshot());
        assert_eq!(
            a.tracker.history(Status::Sick),
            b.tracker.history(Status::Sick)
        );
    }
}
