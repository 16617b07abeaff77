use prep_core::model::{Topic, TopicTier};
use services::TopicOverview;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopicCardVm {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub tier_label: &'static str,
    pub tier_class: &'static str,
    pub estimated_time: String,
    pub concepts: Vec<String>,
    pub progress_label: String,
    pub percent: u32,
    pub is_completed: bool,
    /// Category preselected when opening the question browser from this topic.
    pub category: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopicOverviewVm {
    pub topic_count: usize,
    pub completed: u32,
    pub total: u32,
    pub mastered: usize,
    pub percent: u32,
    pub summary_label: String,
}

fn tier_class(tier: TopicTier) -> &'static str {
    match tier {
        TopicTier::Beginner => "badge badge--easy",
        TopicTier::Intermediate => "badge badge--medium",
        TopicTier::Advanced => "badge badge--hard",
    }
}

#[must_use]
pub fn map_topic_card(topic: &Topic) -> TopicCardVm {
    let percent = topic.completion_percentage();
    TopicCardVm {
        slug: topic.slug().as_str().to_string(),
        title: topic.title().to_string(),
        description: topic.description().to_string(),
        tier_label: topic.tier().as_str(),
        tier_class: tier_class(topic.tier()),
        estimated_time: topic.estimated_time().to_string(),
        concepts: topic.concepts().to_vec(),
        progress_label: format!("{}/{}", topic.completed_count(), topic.question_count()),
        percent,
        is_completed: percent == 100,
        category: topic
            .question_category()
            .map(|category| category.as_str().to_string())
            .unwrap_or_default(),
    }
}

#[must_use]
pub fn map_topic_overview(overview: TopicOverview) -> TopicOverviewVm {
    TopicOverviewVm {
        topic_count: overview.topic_count,
        completed: overview.completed_questions,
        total: overview.total_questions,
        mastered: overview.mastered,
        percent: overview.overall_percent,
        summary_label: format!(
            "{} of {} questions completed",
            overview.completed_questions, overview.total_questions
        ),
    }
}
