use crate::enums::{NotificationCategory, NotificationKind};

/// Feature-screen events that produce a notification with templated copy.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainEvent {
    QuizCompleted {
        quiz_title: String,
        top_career: String,
    },
    ResourceAdded {
        resource_type: String,
        title: String,
    },
    CareerInsight {
        career: String,
    },
}

impl DomainEvent {
    pub fn title(&self) -> String {
        match self {
            DomainEvent::QuizCompleted { .. } => "Quiz Completed! 🎯".to_string(),
            DomainEvent::ResourceAdded { resource_type, .. } => {
                format!("New {resource_type} Available")
            }
            DomainEvent::CareerInsight { career } => format!("Career Insight: {career}"),
        }
    }

    pub fn message(&self) -> String {
        match self {
            DomainEvent::QuizCompleted {
                quiz_title,
                top_career,
            } => format!(
                "You completed \"{quiz_title}\" and your top match is {top_career}. Check resources for this career!"
            ),
            DomainEvent::ResourceAdded { title, .. } => {
                format!("\"{title}\" has been added to help with your career planning.")
            }
            DomainEvent::CareerInsight { career } => format!(
                "New trends and opportunities in {career} field. Explore the latest industry insights."
            ),
        }
    }

    pub fn kind(&self) -> NotificationKind {
        match self {
            DomainEvent::QuizCompleted { .. } => NotificationKind::Success,
            DomainEvent::ResourceAdded { .. } | DomainEvent::CareerInsight { .. } => {
                NotificationKind::Info
            }
        }
    }

    pub fn category(&self) -> NotificationCategory {
        match self {
            DomainEvent::QuizCompleted { .. } => NotificationCategory::Quiz,
            DomainEvent::ResourceAdded { .. } => NotificationCategory::Resources,
            DomainEvent::CareerInsight { .. } => NotificationCategory::Career,
        }
    }
}
