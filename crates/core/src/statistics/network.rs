//! Organization co-participation graph for the network chart.

use serde::Serialize;

use super::{failed, ReportError, ReportKind, StatisticsSource};
use crate::types::DbId;

/// Fixed node size used by the chart.
pub const NODE_SYMBOL_SIZE: u32 = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkNode {
    pub id: DbId,
    pub name: String,
    pub symbol_size: u32,
    /// The organization type.
    pub category: String,
}

/// Undirected edge; `source < target` always holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkLink {
    pub source: DbId,
    pub target: DbId,
    /// Number of projects both organizations take part in.
    pub value: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkCategory {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrganizationNetwork {
    pub nodes: Vec<NetworkNode>,
    pub links: Vec<NetworkLink>,
    pub categories: Vec<NetworkCategory>,
}

pub async fn organization_network<S>(source: &S) -> Result<OrganizationNetwork, ReportError>
where
    S: StatisticsSource + ?Sized,
{
    let fail = failed(ReportKind::Organizations);
    let organizations = source.organizations().await.map_err(&fail)?;
    let pairs = source.collaboration_pairs().await.map_err(&fail)?;

    let mut categories: Vec<NetworkCategory> = Vec::new();
    for org in &organizations {
        if !categories.iter().any(|c| c.name == org.org_type) {
            categories.push(NetworkCategory {
                name: org.org_type.clone(),
            });
        }
    }

    let nodes = organizations
        .into_iter()
        .map(|org| NetworkNode {
            id: org.id,
            name: org.name,
            symbol_size: NODE_SYMBOL_SIZE,
            category: org.org_type,
        })
        .collect();

    // Normalise orientation and drop degenerate rows so the edge invariants
    // hold regardless of what the source returned.
    let mut links: Vec<NetworkLink> = pairs
        .into_iter()
        .filter(|p| p.source != p.target && p.shared_projects > 0)
        .map(|p| NetworkLink {
            source: p.source.min(p.target),
            target: p.source.max(p.target),
            value: p.shared_projects,
        })
        .collect();
    links.sort_by_key(|l| (l.source, l.target));
    links.dedup_by(|b, a| {
        if (a.source, a.target) == (b.source, b.target) {
            a.value += b.value;
            true
        } else {
            false
        }
    });

    Ok(OrganizationNetwork {
        nodes,
        links,
        categories,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statistics::memory::fixtures::*;
    use crate::statistics::memory::InMemorySource;
    use crate::status::WorkStatus;

    /// Three projects: 1 and 2 led by A, 3 led by B; B also joins project 1.
    fn three_project_source() -> InMemorySource {
        let d = date(2024, 3, 1);
        let mut source = InMemorySource::new();
        source.organizations = vec![
            organization(1, "A", "学院"),
            organization(2, "B", "企业"),
            organization(3, "C", "学院"),
        ];
        source.projects = vec![
            project("P1", "国家级项目", WorkStatus::InProgress, 1, d, d),
            project("P2", "市级项目", WorkStatus::InProgress, 1, d, d),
            project("P3", "市级项目", WorkStatus::Completed, 2, d, d),
        ];
        source.participations = vec![
            participation(1, 1, d),
            participation(1, 2, d),
            participation(2, 1, d),
            participation(3, 2, d),
        ];
        source
    }

    #[tokio::test]
    async fn single_shared_project_gives_single_edge() {
        let network = organization_network(&three_project_source()).await.unwrap();

        assert_eq!(network.nodes.len(), 3);
        assert_eq!(
            network.links,
            vec![NetworkLink {
                source: 1,
                target: 2,
                value: 1
            }]
        );
        let names: Vec<_> = network.categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["学院", "企业"]);
    }

    #[tokio::test]
    async fn edges_count_shared_projects_without_self_loops() {
        let mut source = three_project_source();
        let d = date(2024, 3, 1);
        source.participations.push(participation(3, 1, d));
        source.participations.push(participation(3, 3, d));

        let network = organization_network(&source).await.unwrap();
        assert!(network.links.iter().all(|l| l.source < l.target));
        let ab = network
            .links
            .iter()
            .find(|l| (l.source, l.target) == (1, 2))
            .unwrap();
        assert_eq!(ab.value, 2);
        assert_eq!(network.links.len(), 3);
    }

    #[test]
    fn node_serializes_symbol_size_in_camel_case() {
        let node = NetworkNode {
            id: 1,
            name: "A".into(),
            symbol_size: NODE_SYMBOL_SIZE,
            category: "学院".into(),
        };
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["symbolSize"], 50);
    }
}
