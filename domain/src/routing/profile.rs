//! Per-domain pipeline profiles (the dispatch table)

use super::domain::Domain;

const PROJECT_MANAGER: &str = "You are a meticulous project manager. You break problems down into \
ordered, concrete steps and justify why each step is needed. You never solve the problem yourself; \
you only produce the plan that an expert will follow.";

const EXPERT_MATHEMATICIAN: &str = "You are an expert mathematician. You reason rigorously, show every \
calculation, and keep exact notation.";

const EXPERT_PROGRAMMER: &str = "You are an expert programmer. You write correct, idiomatic code and \
reason carefully about edge cases and the exact output required.";

const INTELLIGENT_PREDICTOR: &str = "You are an intelligent predictor. You weigh base rates, trends, and \
available evidence to forecast future events and commit to a single best prediction.";

// Common sense and planning questions deliberately share this persona.
const ALL_KNOWING_ENTITY: &str = "You are an all-knowing entity. You draw on broad world knowledge and \
careful step-by-step thinking to reach the single best answer.";

/// Persona set and task framing used when running the stage pipeline
/// for one domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineProfile {
    pub domain: Domain,
    /// System prompt for the Plan stage
    pub plan_persona: &'static str,
    /// System prompt for the Reason and Extract stages
    pub reason_persona: &'static str,
    /// Short description of the kind of task, woven into stage prompts
    pub task_framing: &'static str,
}

static PROFILES: [PipelineProfile; 5] = [
    PipelineProfile {
        domain: Domain::Math,
        plan_persona: PROJECT_MANAGER,
        reason_persona: EXPERT_MATHEMATICIAN,
        task_framing: "a math problem",
    },
    PipelineProfile {
        domain: Domain::CommonSense,
        plan_persona: PROJECT_MANAGER,
        reason_persona: ALL_KNOWING_ENTITY,
        task_framing: "a common sense reasoning question",
    },
    PipelineProfile {
        domain: Domain::Coding,
        plan_persona: PROJECT_MANAGER,
        reason_persona: EXPERT_PROGRAMMER,
        task_framing: "a programming task",
    },
    PipelineProfile {
        domain: Domain::FuturePrediction,
        plan_persona: PROJECT_MANAGER,
        reason_persona: INTELLIGENT_PREDICTOR,
        task_framing: "a question about a future event",
    },
    PipelineProfile {
        domain: Domain::Planning,
        plan_persona: PROJECT_MANAGER,
        reason_persona: ALL_KNOWING_ENTITY,
        task_framing: "a planning problem",
    },
];

impl PipelineProfile {
    /// Look up the profile for a domain.
    ///
    /// Returns `None` for [`Domain::Error`], which has no pipeline.
    pub fn for_domain(domain: Domain) -> Option<&'static PipelineProfile> {
        PROFILES.iter().find(|p| p.domain == domain)
    }

    /// All profiles in table order.
    pub fn all() -> &'static [PipelineProfile] {
        &PROFILES
    }
}
