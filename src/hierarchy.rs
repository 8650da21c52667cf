//! Hierarchy rendering.
//!
//! Pure view-model construction for one account's details panel and
//! organization chart, plus flattening into terminal lines. The chart is
//! a straight walk of the upstream array: order IS the chain, root
//! first, queried account last.

use crate::types::{AccountKind, UserResponse};

/// Levels at the front of every hierarchy array that sit above what is
/// displayed (system/root placeholders).
const HIDDEN_LEVELS: usize = 2;

/// One rendered node of the organization chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainNode {
    pub username: String,
    pub title: String,
    /// Whether a connector is drawn to the node below.
    pub connector: bool,
}

/// View model for one account namespace's result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserView {
    /// The lookup returned no user payload; nothing else is rendered.
    NoData,
    Details {
        username: String,
        client_id: i64,
        role: &'static str,
        /// Empty when the hierarchy has two or fewer levels; the chart
        /// is suppressed entirely in that case.
        chain: Vec<ChainNode>,
    },
}

/// Title for the chart node at `index` of `total` displayed slots.
fn node_title(index: usize, total: usize, role: &str) -> String {
    if index == 0 {
        "Top Manager".to_string()
    } else if index == total - 1 {
        role.to_string()
    } else if index == total - 2 {
        "Direct Manager".to_string()
    } else {
        format!("Upline Manager {}", total - index - 2)
    }
}

/// Build the view model for one namespace's response.
pub fn user_view(response: &UserResponse, kind: AccountKind) -> UserView {
    let Some(user) = &response.user else {
        return UserView::NoData;
    };
    let role = kind.role_label();

    let mut chain = Vec::new();
    if response.hierarchy.len() > HIDDEN_LEVELS {
        let total = response.hierarchy.len() - HIDDEN_LEVELS;
        for (index, slot) in response.hierarchy[HIDDEN_LEVELS..].iter().enumerate() {
            // Null slots render nothing but still occupy a title index.
            let Some(node) = slot else { continue };
            chain.push(ChainNode {
                username: node.username.clone(),
                title: node_title(index, total, role),
                connector: index < total - 1,
            });
        }
    }

    UserView::Details {
        username: user.username.clone(),
        client_id: user.client_id,
        role,
        chain,
    }
}

/// Flatten a view into terminal lines.
pub fn render_user(view: &UserView) -> Vec<String> {
    match view {
        UserView::NoData => vec!["No user data available".to_string()],
        UserView::Details {
            username,
            client_id,
            role,
            chain,
        } => {
            let mut lines = vec![
                "User Details".to_string(),
                format!("  Username:  {}", username),
                format!("  Client ID: {}", client_id),
                format!("  Role:      {}", role),
            ];

            if !chain.is_empty() {
                lines.push(String::new());
                lines.push("Organization Chart".to_string());
                for node in chain {
                    lines.push(format!("  [{}] {}", node.title, node.username));
                    if node.connector {
                        lines.push("      ▲".to_string());
                    }
                }
            }

            lines
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::HierarchyNode;

    fn node(id: i64, username: &str) -> Option<HierarchyNode> {
        Some(HierarchyNode {
            id,
            client_id: 100 + id,
            username: username.to_string(),
            parent_client_id: if id == 1 { None } else { Some(99 + id) },
        })
    }

    fn response_with_chain(usernames: &[&str]) -> UserResponse {
        UserResponse {
            hierarchy: usernames
                .iter()
                .enumerate()
                .map(|(i, u)| node(i as i64 + 1, u))
                .collect(),
            user: node(usernames.len() as i64, usernames.last().unwrap_or(&"alice")),
            status: 0,
            message: String::new(),
        }
    }

    fn chain(view: &UserView) -> &[ChainNode] {
        match view {
            UserView::Details { chain, .. } => chain,
            UserView::NoData => panic!("expected details view"),
        }
    }

    #[test]
    fn test_no_user_renders_placeholder_regardless_of_hierarchy() {
        let mut response = response_with_chain(&["system", "root", "top", "mid", "alice"]);
        response.user = None;

        let view = user_view(&response, AccountKind::Agent);
        assert_eq!(view, UserView::NoData);
        assert_eq!(render_user(&view), vec!["No user data available"]);
    }

    #[test]
    fn test_short_hierarchy_suppresses_chart() {
        for count in 0..=2 {
            let names = ["system", "root"];
            let response = response_with_chain(&names[..count]);
            let view = user_view(&response, AccountKind::Agent);
            assert!(chain(&view).is_empty(), "chart rendered for {} levels", count);
        }
    }

    #[test]
    fn test_three_displayed_nodes_have_no_upline_titles() {
        // Five levels, two hidden: Top Manager / Direct Manager / Agent.
        let response = response_with_chain(&["system", "root", "top", "mid", "alice"]);
        let view = user_view(&response, AccountKind::Agent);

        let titles: Vec<&str> = chain(&view).iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["Top Manager", "Direct Manager", "Agent"]);
    }

    #[test]
    fn test_four_displayed_nodes_have_one_upline_manager() {
        let response =
            response_with_chain(&["system", "root", "top", "up1", "mid", "alice"]);
        let view = user_view(&response, AccountKind::Player);

        let titles: Vec<&str> = chain(&view).iter().map(|n| n.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Top Manager", "Upline Manager 1", "Direct Manager", "Player"]
        );
    }

    #[test]
    fn test_upline_managers_count_down_toward_direct_manager() {
        let response = response_with_chain(&[
            "system", "root", "top", "up2", "up1", "mid", "alice",
        ]);
        let view = user_view(&response, AccountKind::Agent);

        let titles: Vec<&str> = chain(&view).iter().map(|n| n.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Top Manager",
                "Upline Manager 2",
                "Upline Manager 1",
                "Direct Manager",
                "Agent"
            ]
        );
    }

    #[test]
    fn test_connectors_on_every_node_but_the_last() {
        let response = response_with_chain(&["system", "root", "top", "mid", "alice"]);
        let view = user_view(&response, AccountKind::Agent);

        let connectors: Vec<bool> = chain(&view).iter().map(|n| n.connector).collect();
        assert_eq!(connectors, vec![true, true, false]);
    }

    #[test]
    fn test_null_slot_is_skipped_without_shifting_titles() {
        let mut response =
            response_with_chain(&["system", "root", "top", "up1", "mid", "alice"]);
        // Null out the Upline Manager 1 slot.
        response.hierarchy[3] = None;

        let view = user_view(&response, AccountKind::Agent);
        let titles: Vec<&str> = chain(&view).iter().map(|n| n.title.as_str()).collect();
        // Skipped slot renders nothing; remaining titles keep their
        // positions within the sliced array.
        assert_eq!(titles, vec!["Top Manager", "Direct Manager", "Agent"]);
        assert_eq!(chain(&view).len(), 3);
    }

    #[test]
    fn test_rendered_node_count_matches_sliced_length() {
        let response =
            response_with_chain(&["system", "root", "a", "b", "c", "d", "e", "alice"]);
        let view = user_view(&response, AccountKind::Agent);
        assert_eq!(chain(&view).len(), response.hierarchy.len() - 2);
    }

    #[test]
    fn test_render_user_details_and_chart_lines() {
        let response = response_with_chain(&["system", "root", "top", "mid", "alice"]);
        let lines = render_user(&user_view(&response, AccountKind::Agent));

        assert_eq!(lines[0], "User Details");
        assert!(lines.iter().any(|l| l.contains("alice")));
        assert!(lines.iter().any(|l| l == "Organization Chart"));
        assert!(lines.iter().any(|l| l.contains("[Top Manager] top")));
        assert!(lines.iter().any(|l| l.contains("[Agent] alice")));
        // Two connectors for three chart nodes.
        assert_eq!(lines.iter().filter(|l| l.contains('▲')).count(), 2);
    }
}
