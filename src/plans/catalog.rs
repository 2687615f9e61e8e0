//! Fixed diet/workout catalog keyed by body type. The bundle content is part
//! of the API contract; clients render it as-is.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyType {
    Ectomorph,
    Mesomorph,
    Endomorph,
}

impl BodyType {
    /// Exact lowercase keys only; anything else is not a body type.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "ectomorph" => Some(Self::Ectomorph),
            "mesomorph" => Some(Self::Mesomorph),
            "endomorph" => Some(Self::Endomorph),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct PlanBundle {
    pub diet: Vec<Meal>,
    pub workouts: Vec<WorkoutProgram>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Meal {
    pub title: &'static str,
    pub time: &'static str,
    pub steps: Vec<&'static str>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct WorkoutProgram {
    pub level: &'static str,
    pub desc: &'static str,
    pub exercises: Vec<Exercise>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Exercise {
    pub name: &'static str,
    pub steps: Vec<&'static str>,
}

/// Pure lookup: the same body type always yields the identical bundle.
pub fn select(body_type: BodyType) -> PlanBundle {
    match body_type {
        BodyType::Ectomorph => PlanBundle {
            diet: vec![
                Meal {
                    title: "Overnight Oats",
                    time: "Prep 5 min",
                    steps: vec![
                        "Combine oats, milk, protein powder.",
                        "Stir in peanut butter and honey.",
                        "Top with banana and refrigerate.",
                    ],
                },
                Meal {
                    title: "High-Calorie Chicken Bowl",
                    time: "25 min",
                    steps: vec![
                        "Marinate & grill 200g chicken.",
                        "Serve with 1.5 cups rice and veggies.",
                    ],
                },
            ],
            workouts: vec![WorkoutProgram {
                level: "Beginner (3x/week) — Full-body compound",
                desc: "Focus on heavy compound lifts.",
                exercises: vec![
                    Exercise {
                        name: "Back Squat",
                        steps: vec!["3 working sets × 6–8 reps."],
                    },
                    Exercise {
                        name: "Deadlift",
                        steps: vec!["3 sets × 4–6 reps."],
                    },
                    Exercise {
                        name: "Bench Press",
                        steps: vec!["3 sets × 6–8 reps."],
                    },
                ],
            }],
        },
        BodyType::Mesomorph => PlanBundle {
            diet: vec![
                Meal {
                    title: "Veggie Omelet",
                    time: "10 min",
                    steps: vec![
                        "Whisk 3 eggs.",
                        "Sauté veggies, pour eggs, cook. Serve with toast.",
                    ],
                },
                Meal {
                    title: "Grilled Chicken + Sweet Potato",
                    time: "30 min",
                    steps: vec![
                        "Grill chicken breasts.",
                        "Roast sweet potato wedges. Serve with greens.",
                    ],
                },
            ],
            workouts: vec![WorkoutProgram {
                level: "Push / Pull / Legs (4x week)",
                desc: "Balanced hypertrophy & strength.",
                exercises: vec![
                    Exercise {
                        name: "Squat",
                        steps: vec!["4 sets × 6–8 reps."],
                    },
                    Exercise {
                        name: "Incline Bench",
                        steps: vec!["4 sets × 8–10 reps."],
                    },
                    Exercise {
                        name: "Barbell Row",
                        steps: vec!["3 sets × 8–10 reps."],
                    },
                ],
            }],
        },
        BodyType::Endomorph => PlanBundle {
            diet: vec![
                Meal {
                    title: "Greek Yogurt Bowl",
                    time: "5 min",
                    steps: vec!["200g Greek yogurt, add chia seeds and berries."],
                },
                Meal {
                    title: "Grilled Fish + Large Salad",
                    time: "20 min",
                    steps: vec!["Grill fish fillet, serve over mixed greens."],
                },
            ],
            workouts: vec![WorkoutProgram {
                level: "Circuit + Strength (Beginner)",
                desc: "Cardio-focused circuits.",
                exercises: vec![
                    Exercise {
                        name: "HIIT Sprints",
                        steps: vec!["8–10 rounds of 30s sprint / 60s walk."],
                    },
                    Exercise {
                        name: "Burpees Circuit",
                        steps: vec!["3 rounds: 12 burpees, 20 squats, 30s plank."],
                    },
                ],
            }],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_body_type_has_a_non_empty_bundle() {
        for body_type in [BodyType::Ectomorph, BodyType::Mesomorph, BodyType::Endomorph] {
            let bundle = select(body_type);
            assert!(!bundle.diet.is_empty());
            assert!(!bundle.workouts.is_empty());
            assert!(bundle.workouts.iter().all(|w| !w.exercises.is_empty()));
        }
    }

    #[test]
    fn selection_is_deterministic() {
        for body_type in [BodyType::Ectomorph, BodyType::Mesomorph, BodyType::Endomorph] {
            assert_eq!(select(body_type), select(body_type));
        }
    }

    #[test]
    fn bundle_content_is_fixed() {
        let ecto = select(BodyType::Ectomorph);
        assert_eq!(ecto.diet[0].title, "Overnight Oats");
        assert_eq!(ecto.workouts[0].level, "Beginner (3x/week) — Full-body compound");

        let meso = select(BodyType::Mesomorph);
        assert_eq!(meso.diet[1].title, "Grilled Chicken + Sweet Potato");
        assert_eq!(meso.workouts[0].exercises[1].name, "Incline Bench");

        let endo = select(BodyType::Endomorph);
        assert_eq!(endo.diet[0].time, "5 min");
        assert_eq!(endo.workouts[0].desc, "Cardio-focused circuits.");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(BodyType::parse("unknown").is_none());
        assert!(BodyType::parse("").is_none());
        assert!(BodyType::parse("Ectomorph").is_none());
        assert!(BodyType::parse("ectomorph ").is_none());
    }
}
