use crate::domain::model::{ExperienceEntry, Profile, Project};

/// 頁面資料槽與載入旗標。四個槽位各自只被寫入一次，
/// 不會被清除或重新抓取。
#[derive(Debug, Clone)]
pub struct PageState {
    pub who: Option<Profile>,
    pub experience: Option<Vec<ExperienceEntry>>,
    pub skills: Option<Vec<String>>,
    pub projects: Option<Vec<Project>>,
    pub loading: bool,
    pub error: Option<String>,
}

impl PageState {
    pub fn new() -> Self {
        Self {
            who: None,
            experience: None,
            skills: None,
            projects: None,
            loading: true,
            error: None,
        }
    }

    /// 純函數的渲染決策，可在任何時點重新求值。
    /// loading 優先於 error，error 優先於資料槽檢查。
    pub fn view(&self) -> PageView<'_> {
        if self.loading {
            return PageView::Loading;
        }
        if let Some(message) = self.error.as_deref() {
            return PageView::Error(message);
        }
        match (&self.who, &self.experience, &self.skills, &self.projects) {
            (Some(profile), Some(experience), Some(skills), Some(projects)) => {
                PageView::Ready(ReadyPage {
                    profile,
                    experience,
                    skills,
                    projects,
                })
            }
            // loading 已清除但槽位不齊。循序協議下不會發生，仍明確處理。
            _ => PageView::Pending,
        }
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
pub enum PageView<'a> {
    Loading,
    Error(&'a str),
    Pending,
    Ready(ReadyPage<'a>),
}

/// 借用自 PageState 的完整頁面資料
#[derive(Debug, Clone, Copy)]
pub struct ReadyPage<'a> {
    pub profile: &'a Profile,
    pub experience: &'a [ExperienceEntry],
    pub skills: &'a [String],
    pub projects: &'a [Project],
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_profile() -> Profile {
        Profile {
            name: "Ada".to_string(),
            title: "Engineer".to_string(),
            summary: "builds things".to_string(),
        }
    }

    fn populated_state() -> PageState {
        PageState {
            who: Some(sample_profile()),
            experience: Some(vec![]),
            skills: Some(vec!["Go".to_string(), "Rust".to_string()]),
            projects: Some(vec![]),
            loading: false,
            error: None,
        }
    }

    #[test]
    fn test_fresh_state_shows_loading() {
        let state = PageState::new();
        assert!(matches!(state.view(), PageView::Loading));
    }

    #[test]
    fn test_loading_wins_over_populated_slots() {
        let mut state = populated_state();
        state.loading = true;
        assert!(matches!(state.view(), PageView::Loading));
    }

    #[test]
    fn test_error_shown_once_loading_cleared() {
        let mut state = PageState::new();
        state.error = Some("Failed to fetch skills: 500".to_string());
        state.loading = false;
        match state.view() {
            PageView::Error(message) => assert_eq!(message, "Failed to fetch skills: 500"),
            other => panic!("expected error view, got {:?}", other),
        }
    }

    #[test]
    fn test_error_wins_over_populated_slots() {
        let mut state = populated_state();
        state.error = Some("Failed to fetch experience data: 502".to_string());
        assert!(matches!(state.view(), PageView::Error(_)));
    }

    #[test]
    fn test_any_unset_slot_yields_pending_not_ready() {
        // 每個槽位單獨缺席都必須擋住完整頁面
        for missing in 0..4 {
            let mut state = populated_state();
            match missing {
                0 => state.who = None,
                1 => state.experience = None,
                2 => state.skills = None,
                _ => state.projects = None,
            }
            assert!(
                matches!(state.view(), PageView::Pending),
                "slot {} unset should gate rendering",
                missing
            );
        }
    }

    #[test]
    fn test_all_slots_populated_yields_ready() {
        let state = populated_state();
        match state.view() {
            PageView::Ready(page) => {
                assert_eq!(page.profile.name, "Ada");
                assert_eq!(page.skills, ["Go".to_string(), "Rust".to_string()]);
            }
            other => panic!("expected ready view, got {:?}", other),
        }
    }
}
