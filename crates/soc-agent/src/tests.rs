//! Unit tests for soc-agent.

use soc_behavior::{ActionCatalog, ActionContext, NeedCatalog};
use soc_core::{AgentId, Point, Tick};
use soc_mobility::MobilityEngine;
use soc_spatial::{Geography, GeographyBuilder};

use crate::{Human, HumanBuilder};

// ── Helpers ───────────────────────────────────────────────────────────────────

struct Fixture {
    geo:      Geography,
    needs:    NeedCatalog,
    actions:  ActionCatalog,
    mobility: MobilityEngine,
}

impl Fixture {
    fn new() -> Self {
        let mut b = GeographyBuilder::new(100.0);
        b.add_forest(10.0, 10.0, 30.0, 40.0);
        b.add_forest(70.0, 40.0, 20.0, 20.0);
        b.add_lake(40.0, 80.0, 5.0);
        b.add_lake(60.0, 30.0, 10.0);
        Self {
            geo:      b.build().unwrap(),
            needs:    NeedCatalog::with_defaults(),
            actions:  ActionCatalog::with_defaults(),
            mobility: MobilityEngine::default(),
        }
    }

    /// Only the lake at (40, 80), so the drink destination is unambiguous.
    fn single_lake() -> Self {
        let mut b = GeographyBuilder::new(100.0);
        b.add_lake(40.0, 80.0, 5.0);
        Self { geo: b.build().unwrap(), ..Self::new() }
    }

    fn ctx(&self, tick: u64) -> ActionContext<'_> {
        ActionContext::new(Tick(tick), &self.geo, &self.needs, &self.actions)
    }

    fn human(&self, x: f64, y: f64) -> Human {
        HumanBuilder::new(Point::new(x, y)).build(AgentId(0), &self.needs).unwrap()
    }
}

// ── Construction ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod construction {
    use super::*;
    use crate::{AgentError, Population};

    #[test]
    fn defaults_to_full_satisfaction() {
        let f = Fixture::new();
        let h = f.human(1.0, 2.0);
        assert_eq!(h.satisfaction(), &[100.0, 100.0, 100.0, 100.0]);
        assert_eq!(h.position(), Point::new(1.0, 2.0));
        assert!(h.is_idle());
        assert_eq!(h.phase(), None);
    }

    #[test]
    fn wrong_satisfaction_length_rejected() {
        let f = Fixture::new();
        let err = HumanBuilder::new(Point::ORIGIN)
            .satisfaction(vec![1.0, 2.0])
            .build(AgentId(0), &f.needs)
            .unwrap_err();
        assert!(matches!(err, AgentError::SatisfactionLength { expected: 4, got: 2 }));
    }

    #[test]
    fn non_finite_position_rejected() {
        let f = Fixture::new();
        let res = HumanBuilder::new(Point::new(f64::NAN, 0.0)).build(AgentId(0), &f.needs);
        assert!(matches!(res, Err(AgentError::NonFinitePosition { .. })));
    }

    #[test]
    fn population_assigns_ids_in_order() {
        let f = Fixture::new();
        let mut pop = Population::new();
        let a = pop.add(HumanBuilder::new(Point::new(30.0, 20.0)), &f.needs).unwrap();
        let b = pop.add(HumanBuilder::new(Point::new(50.0, 40.0)), &f.needs).unwrap();
        assert_eq!((a, b), (AgentId(0), AgentId(1)));
        assert_eq!(pop.get(b).unwrap().position(), Point::new(50.0, 40.0));
        assert!(pop.get(AgentId(2)).is_none());
        assert_eq!(pop.busy_count(), 0);
        assert_eq!(pop.distressed_count(), 0);
    }
}

// ── Do / busy rule ────────────────────────────────────────────────────────────

#[cfg(test)]
mod do_action {
    use super::*;
    use crate::{DoOutcome, Phase};
    use soc_behavior::{Action, Destination};

    #[test]
    fn in_place_action_starts_performing() {
        let f = Fixture::new();
        let mut h = f.human(30.0, 20.0);
        let sleep = f.actions.get(ActionCatalog::SLEEP).unwrap();
        assert_eq!(h.do_action(sleep, &f.ctx(0), &f.mobility), DoOutcome::Started(Phase::Performing));
        let exec = h.current().unwrap();
        assert_eq!(exec.elapsed, 0);
        assert_eq!(exec.duration, 3);
        assert_eq!(exec.destination, Point::new(30.0, 20.0));
    }

    #[test]
    fn inside_resource_starts_performing() {
        // (30, 20) lies inside forest (10, 10, 30, 40).
        let f = Fixture::new();
        let mut h = f.human(30.0, 20.0);
        let eat = f.actions.get(ActionCatalog::EAT).unwrap();
        assert_eq!(h.do_action(eat, &f.ctx(0), &f.mobility), DoOutcome::Started(Phase::Performing));
    }

    #[test]
    fn remote_resource_starts_traveling() {
        let f = Fixture::new();
        let mut h = f.human(30.0, 20.0);
        let drink = f.actions.get(ActionCatalog::DRINK).unwrap();
        assert_eq!(h.do_action(drink, &f.ctx(0), &f.mobility), DoOutcome::Started(Phase::Traveling));
        assert!(!h.is_idle());
        assert!(h.view().busy);
    }

    #[test]
    fn busy_rejects_and_keeps_state() {
        let f = Fixture::new();
        let mut h = f.human(30.0, 20.0);
        let drink = f.actions.get(ActionCatalog::DRINK).unwrap();
        let sleep = f.actions.get(ActionCatalog::SLEEP).unwrap();
        h.do_action(drink, &f.ctx(0), &f.mobility);
        for t in 1..=4 {
            h.tick(&f.ctx(t), &f.mobility);
        }
        let before = h.current().cloned();
        let pos = h.position();
        let sat = h.satisfaction().to_vec();

        assert_eq!(h.do_action(sleep, &f.ctx(4), &f.mobility), DoOutcome::Busy);
        assert_eq!(h.current().cloned(), before);
        assert_eq!(h.position(), pos);
        assert_eq!(h.satisfaction(), sat.as_slice());
    }

    #[test]
    fn missing_resource_performs_in_place() {
        let mut f = Fixture::new();
        f.geo = Geography::empty(100.0);
        let mut h = f.human(5.0, 5.0);
        let drink = f.actions.get(ActionCatalog::DRINK).unwrap();
        assert_eq!(h.do_action(drink, &f.ctx(0), &f.mobility), DoOutcome::Started(Phase::Performing));
        assert_eq!(h.current().unwrap().destination, Point::new(5.0, 5.0));
    }

    #[test]
    fn unreachably_far_destination_starts_after_tick_zero() {
        let mut f = Fixture::new();
        let id = f
            .actions
            .add(Action::new("trek").destination(Destination::Fixed(Point::new(1e20, 0.0))))
            .unwrap();
        let mut h = f.human(0.0, 0.0);
        let trek = f.actions.get(id).unwrap();
        assert_eq!(h.do_action(trek, &f.ctx(5), &f.mobility), DoOutcome::Started(Phase::Traveling));
        let movement = &h.current().unwrap().movement;
        assert_eq!(movement.departure_tick, Tick(5));
        assert_eq!(movement.arrival_tick, Tick(u64::MAX));
        assert_eq!(h.tick(&f.ctx(6), &f.mobility), crate::TickEvent::Traveled);
    }
}

// ── Tick ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tick {
    use soc_behavior::{Action, Destination};

    use super::*;
    use crate::TickEvent;

    #[test]
    fn idle_tick_only_decays() {
        let f = Fixture::new();
        let mut h = f.human(30.0, 20.0);
        assert_eq!(h.tick(&f.ctx(1), &f.mobility), TickEvent::Idle);
        assert_eq!(h.satisfaction(), &[99.0, 98.0, 99.0, 99.0]);
        assert_eq!(h.position(), Point::new(30.0, 20.0));
    }

    #[test]
    fn perform_in_place_completes_after_duration() {
        let f = Fixture::new();
        let mut h = f.human(30.0, 20.0);
        h.do_action(f.actions.get(ActionCatalog::SLEEP).unwrap(), &f.ctx(0), &f.mobility);

        assert_eq!(h.tick(&f.ctx(1), &f.mobility), TickEvent::Performed);
        assert_eq!(h.tick(&f.ctx(2), &f.mobility), TickEvent::Performed);
        assert_eq!(h.tick(&f.ctx(3), &f.mobility), TickEvent::Completed(ActionCatalog::SLEEP));
        assert!(h.is_idle());
        // Rest restored; everything else decayed three times.
        assert_eq!(h.satisfaction(), &[97.0, 94.0, 100.0, 97.0]);
    }

    #[test]
    fn zero_duration_completes_next_tick() {
        let mut f = Fixture::new();
        let id = f
            .actions
            .add(Action::new("nap").affects(soc_behavior::NeedCatalog::REST).duration(0))
            .unwrap();
        let mut h = f.human(0.0, 0.0);
        h.do_action(f.actions.get(id).unwrap(), &f.ctx(0), &f.mobility);
        assert!(!h.is_idle());
        assert_eq!(h.tick(&f.ctx(1), &f.mobility), TickEvent::Completed(id));
    }

    #[test]
    fn travel_takes_ceil_distance_over_speed() {
        let mut f = Fixture::new();
        let id = f
            .actions
            .add(Action::new("walk").destination(Destination::Fixed(Point::new(7.5, 0.0))))
            .unwrap();
        let mut h = f.human(0.0, 0.0);
        h.do_action(f.actions.get(id).unwrap(), &f.ctx(0), &f.mobility);

        let mut traveling = 0;
        let mut t = 0;
        loop {
            t += 1;
            match h.tick(&f.ctx(t), &f.mobility) {
                TickEvent::Traveled => traveling += 1,
                TickEvent::Arrived => {
                    traveling += 1;
                    break;
                }
                other => panic!("unexpected {other:?}"),
            }
        }
        assert_eq!(traveling, 8);
        assert_eq!(h.position(), Point::new(7.5, 0.0));
        assert_eq!(h.phase(), Some(crate::Phase::Performing));
    }

    #[test]
    fn faster_walkers_arrive_sooner() {
        let mut f = Fixture::new();
        f.mobility = MobilityEngine::new(2.0, 0.01).unwrap();
        let id = f
            .actions
            .add(Action::new("walk").destination(Destination::Fixed(Point::new(0.0, 9.0))))
            .unwrap();
        let mut h = f.human(0.0, 0.0);
        h.do_action(f.actions.get(id).unwrap(), &f.ctx(0), &f.mobility);
        let arrival = (1..=10)
            .find(|&t| h.tick(&f.ctx(t), &f.mobility) == TickEvent::Arrived)
            .unwrap();
        assert_eq!(arrival, 5);
    }

    #[test]
    fn drink_end_to_end() {
        let f = Fixture::single_lake();
        let lake_centre = Point::new(40.0, 80.0);
        let edge = |p: Point| (p.distance(lake_centre) - 5.0).max(0.0);

        let mut h = f.human(30.0, 20.0);
        let drink = f.actions.get(ActionCatalog::DRINK).unwrap();
        h.do_action(drink, &f.ctx(0), &f.mobility);

        let mut last_edge = edge(h.position());
        let mut t = 0u64;
        loop {
            t += 1;
            let event = h.tick(&f.ctx(t), &f.mobility);
            let e = edge(h.position());
            match event {
                TickEvent::Traveled | TickEvent::Arrived => {
                    assert!(e < last_edge, "edge distance must shrink while traveling");
                    last_edge = e;
                }
                TickEvent::Performed => {}
                TickEvent::Completed(id) => {
                    assert_eq!(id, ActionCatalog::DRINK);
                    break;
                }
                TickEvent::Idle => panic!("went idle before completing"),
            }
        }

        // 56 steps to the shore, then 3 ticks of drinking.
        assert_eq!(t, 59);
        assert!(last_edge < 1e-9);
        let s = h.satisfaction();
        assert_eq!(s[NeedCatalog::WATER.index()], 100.0);
        assert_eq!(s[NeedCatalog::FOOD.index()], 100.0 - 59.0);
        assert_eq!(s[NeedCatalog::REST.index()], 100.0 - 59.0);
        assert_eq!(s[NeedCatalog::HYGIENE.index()], 100.0 - 59.0);
    }

    #[test]
    fn nearest_lake_is_chosen_at_start() {
        let f = Fixture::new();
        let mut h = f.human(45.0, 78.0);
        h.do_action(f.actions.get(ActionCatalog::DRINK).unwrap(), &f.ctx(0), &f.mobility);
        let dest = h.current().unwrap().destination;
        assert!((dest.distance(Point::new(40.0, 80.0)) - 5.0).abs() < 1e-9);
    }

    #[test]
    fn distress_and_reward() {
        let f = Fixture::new();
        let mut h = HumanBuilder::new(Point::ORIGIN)
            .satisfaction(vec![100.0, 2.0, 100.0, 100.0])
            .build(AgentId(0), &f.needs)
            .unwrap();
        assert!(!h.is_distressed());
        // 2*50 + 4*(2-50) + 1*50 + 0.5*50
        assert_eq!(h.reward(&f.needs), -17.0);

        h.tick(&f.ctx(1), &f.mobility);
        assert!(h.is_distressed());
        assert!(h.reward(&f.needs) < -1e9);

        // Never removed, keeps decaying.
        h.tick(&f.ctx(2), &f.mobility);
        assert_eq!(h.satisfaction()[NeedCatalog::WATER.index()], -2.0);
    }
}

// ── Properties ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod properties {
    use proptest::prelude::*;
    use soc_behavior::{Action, Destination};

    use super::*;
    use crate::TickEvent;

    proptest! {
        #[test]
        fn idle_ticks_never_move(x in 0.0..100.0f64, y in 0.0..100.0f64, n in 1u64..50) {
            let f = Fixture::new();
            let mut h = f.human(x, y);
            for t in 1..=n {
                prop_assert_eq!(h.tick(&f.ctx(t), &f.mobility), TickEvent::Idle);
            }
            prop_assert_eq!(h.position(), Point::new(x, y));
            prop_assert_eq!(h.satisfaction()[NeedCatalog::WATER.index()], 100.0 - 2.0 * n as f64);
        }

        #[test]
        fn travel_ticks_match_ceiling(d in 0.5..80.0f64) {
            let mut f = Fixture::new();
            // Keep the last partial step clear of the arrival epsilon.
            prop_assume!(d - d.floor() > 0.02 || d - d.floor() == 0.0);
            let id = f.actions.add(Action::new("go").destination(Destination::Fixed(Point::new(d, 0.0)))).unwrap();
            let mut h = f.human(0.0, 0.0);
            h.do_action(f.actions.get(id).unwrap(), &f.ctx(0), &f.mobility);
            let mut ticks = 0u64;
            while h.phase() == Some(crate::Phase::Traveling) {
                ticks += 1;
                h.tick(&f.ctx(ticks), &f.mobility);
            }
            prop_assert_eq!(ticks, d.ceil() as u64);
            prop_assert_eq!(h.position(), Point::new(d, 0.0));
        }
    }
}
