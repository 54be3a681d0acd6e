mod test_records;

use portfolio_showcase::{
    entities::project::Project,
    use_cases::{
        aggregate::{
            build_frequency_table, build_frequency_table_with_threshold, category_distribution,
            tag_distribution, technology_distribution,
        },
        filter::{
            featured_projects, filter_projects, related_projects, unique_categories,
            unique_technologies, FilterCriteria,
        },
        search::{search, MatchedField},
        sort::{sort_projects, sort_projects_by_param, ProjectQuery, SortKey},
    },
};
use test_records::*;

fn titles(projects: &[&Project]) -> Vec<String> {
    projects.iter().map(|p| p.title.clone()).collect()
}

// ───── Filter ───────────────────────────────────────────────────────

#[test]
fn filter_without_criteria_returns_everything_in_order() {
    let projects = catalogue();
    let filtered = filter_projects(&projects, &FilterCriteria::default());

    assert_eq!(filtered.len(), projects.len());
    assert!(filtered.iter().zip(&projects).all(|(a, b)| a.id == b.id));
}

#[test]
fn empty_strings_place_no_constraint() {
    let projects = catalogue();
    let criteria = FilterCriteria::default()
        .with_category("")
        .with_technology("")
        .with_query("");

    assert!(criteria.is_empty());
    assert_eq!(filter_projects(&projects, &criteria).len(), projects.len());
}

#[test]
fn filter_results_satisfy_every_criterion() {
    let projects = catalogue();
    let criteria = FilterCriteria::default()
        .with_category("web")
        .with_technology("React");

    let filtered = filter_projects(&projects, &criteria);

    assert_eq!(titles(&filtered), vec!["Shop App", "Élan Dashboard"]);
    assert!(filtered.iter().all(|p| p.category == "web" && p.uses_technology("React")));
}

#[test]
fn technology_must_match_exactly() {
    let projects = catalogue();
    let filtered = filter_projects(&projects, &FilterCriteria::default().with_technology("react"));
    assert!(filtered.is_empty());

    let filtered = filter_projects(&projects, &FilterCriteria::default().with_technology("React Native"));
    assert_eq!(titles(&filtered), vec!["apex Mobile"]);
}

#[test]
fn query_matches_title_or_description_case_insensitively() {
    let projects = catalogue();

    let filtered = filter_projects(&projects, &FilterCriteria::default().with_query("SHOP"));
    assert_eq!(titles(&filtered), vec!["Shop App", "Blog Tool"]);

    let filtered = filter_projects(&projects, &FilterCriteria::default().with_query("maps"));
    assert_eq!(titles(&filtered), vec!["apex Mobile"]);

    // tags are not part of the filter query
    let filtered = filter_projects(&projects, &FilterCriteria::default().with_query("charts"));
    assert!(filtered.is_empty());
}

#[test]
fn unknown_category_yields_nothing() {
    let projects = catalogue();
    let filtered = filter_projects(&projects, &FilterCriteria::default().with_category("games"));
    assert!(filtered.is_empty());
}

#[test]
fn filter_options_are_distinct_in_first_seen_order() {
    let projects = catalogue();

    assert_eq!(unique_categories(&projects), vec!["web", "tools", "mobile"]);
    assert_eq!(
        unique_technologies(&projects),
        vec!["React", "Rust", "Go", "React Native", "Terraform", "Docker"]
    );
}

#[test]
fn featured_and_related_projects() {
    let projects = catalogue();

    assert_eq!(titles(&featured_projects(&projects)), vec!["Élan Dashboard"]);

    let shop = &projects[0];
    let related = related_projects(&projects, shop);
    assert_eq!(titles(&related), vec!["Élan Dashboard"]);

    let blog_tool = &projects[1];
    assert_eq!(titles(&related_projects(&projects, blog_tool)), vec!["Infra Kit"]);
}

// ───── Sort ─────────────────────────────────────────────────────────

#[test]
fn recent_and_oldest_order_by_year_with_stable_ties() {
    let projects = catalogue();

    let recent = sort_projects(&projects, SortKey::Recent);
    assert_eq!(
        titles(&recent),
        vec!["Blog Tool", "apex Mobile", "Élan Dashboard", "Shop App", "Infra Kit"]
    );

    let oldest = sort_projects(&projects, SortKey::Oldest);
    assert_eq!(
        titles(&oldest),
        vec!["Infra Kit", "Shop App", "Élan Dashboard", "Blog Tool", "apex Mobile"]
    );
}

#[test]
fn name_order_ignores_case_and_accents() {
    let projects = catalogue();
    let by_name = sort_projects(&projects, SortKey::Name);

    assert_eq!(
        titles(&by_name),
        vec!["apex Mobile", "Blog Tool", "Élan Dashboard", "Infra Kit", "Shop App"]
    );
}

#[test]
fn sorting_is_idempotent() {
    let projects = catalogue();

    for key in [SortKey::Recent, SortKey::Oldest, SortKey::Name] {
        let once = sort_projects(&projects, key);
        let twice = sort_projects(once.clone(), key);
        assert_eq!(titles(&once), titles(&twice), "{} is not idempotent", key);
    }
}

#[test]
fn recent_then_oldest_equals_oldest() {
    let projects = catalogue();

    let via_recent = sort_projects(sort_projects(&projects, SortKey::Recent), SortKey::Oldest);
    let direct = sort_projects(&projects, SortKey::Oldest);

    // years agree everywhere; equal-year runs may differ only in tie order
    let years = |ps: &[&Project]| ps.iter().map(|p| p.year).collect::<Vec<_>>();
    assert_eq!(years(&via_recent), years(&direct));
}

#[test]
fn sort_does_not_touch_the_input() {
    let projects = catalogue();
    let before: Vec<String> = projects.iter().map(|p| p.id.clone()).collect();

    let _ = sort_projects(&projects, SortKey::Name);

    let after: Vec<String> = projects.iter().map(|p| p.id.clone()).collect();
    assert_eq!(before, after);
}

#[test]
fn unknown_sort_key_keeps_input_order() {
    let projects = catalogue();

    let unsorted = sort_projects_by_param(&projects, Some("popularity"));
    assert!(unsorted.iter().zip(&projects).all(|(a, b)| a.id == b.id));

    let default = sort_projects_by_param(&projects, None);
    assert_eq!(titles(&default), titles(&sort_projects(&projects, SortKey::Recent)));
}

#[test]
fn sort_keys_parse_from_lowercase_names() {
    assert_eq!("recent".parse::<SortKey>(), Ok(SortKey::Recent));
    assert_eq!("oldest".parse::<SortKey>(), Ok(SortKey::Oldest));
    assert_eq!("name".parse::<SortKey>(), Ok(SortKey::Name));
    assert!("Name".parse::<SortKey>().is_err());
    assert_eq!(SortKey::default(), SortKey::Recent);
}

#[test]
fn shop_query_then_recent_sort() {
    let projects = shop_and_blog();
    let query = ProjectQuery {
        criteria: FilterCriteria::default().with_query("shop"),
        sort: Some("recent".to_string()),
    };

    assert_eq!(titles(&query.run(&projects)), vec!["Blog Tool", "Shop App"]);
}

// ───── Search ───────────────────────────────────────────────────────

#[test]
fn blank_query_finds_nothing() {
    let projects = catalogue();
    assert!(search(&projects, "").is_empty());
    assert!(search(&projects, "   ").is_empty());
}

#[test]
fn title_match_beats_description_match() {
    let projects = shop_and_blog();
    let results = search(&projects, "shop");

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].record.title, "Shop App");
    assert_eq!(results[0].matched_field, MatchedField::Title);
    assert_eq!(results[1].record.title, "Blog Tool");
    assert_eq!(results[1].matched_field, MatchedField::Description);
}

#[test]
fn tags_and_technologies_are_searched_last() {
    let projects = catalogue();

    let results = search(&projects, "CHARTS");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].matched_field, MatchedField::Tags);

    let results = search(&projects, "terraform");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].record.title, "Infra Kit");
    assert_eq!(results[0].matched_field, MatchedField::Technologies);
}

#[test]
fn each_project_appears_at_most_once() {
    let projects = vec![project_with(
        "1", "React thing", 2020, "web", "React everywhere", &["react"], &["React"],
    )];

    let results = search(&projects, "react");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].matched_field, MatchedField::Title);
}

#[test]
fn search_results_serialize_with_camel_case_field() {
    let projects = shop_and_blog();
    let results = search(&projects, "cart");
    let json = serde_json::to_value(&results).unwrap();

    assert_eq!(json[0]["matchedField"], "tags");
    assert_eq!(json[1]["matchedField"], "description");
    assert_eq!(json[1]["record"]["title"], "Blog Tool");
}

// ───── Aggregates ───────────────────────────────────────────────────

#[test]
fn ten_distinct_labels_fold_into_other() {
    let projects: Vec<Project> = (0..10)
        .map(|i| {
            let tech = format!("Tech{}", i);
            project_with(&i.to_string(), "P", 2020, "web", "", &[], &[tech.as_str()])
        })
        .collect();

    let table = technology_distribution(&projects);

    assert_eq!(table.len(), 9);
    assert_eq!(table.labels.last().map(String::as_str), Some("Other"));
    assert_eq!(table.counts.last(), Some(&2));
    assert_eq!(&table.labels[..8], &["Tech0", "Tech1", "Tech2", "Tech3", "Tech4", "Tech5", "Tech6", "Tech7"]);
}

#[test]
fn counts_are_sorted_descending_with_first_seen_ties() {
    let projects = vec![
        project_with("1", "A", 2020, "web", "", &[], &["Go", "Rust"]),
        project_with("2", "B", 2020, "web", "", &[], &["Rust", "Elm"]),
        project_with("3", "C", 2020, "web", "", &[], &["Rust", "Go"]),
    ];

    let table = technology_distribution(&projects);

    assert_eq!(table.labels, vec!["Rust", "Go", "Elm"]);
    assert_eq!(table.counts, vec![3, 2, 1]);
    assert_eq!(table.count_of("Go"), Some(2));
    assert_eq!(table.count_of("Java"), None);
}

#[test]
fn no_other_entry_at_or_below_the_threshold() {
    let projects: Vec<Project> = (0..8)
        .map(|i| {
            let tech = format!("T{}", i);
            project_with(&i.to_string(), "P", 2020, "web", "", &[], &[tech.as_str()])
        })
        .collect();

    let table = technology_distribution(&projects);
    assert_eq!(table.len(), 8);
    assert!(!table.labels.iter().any(|l| l == "Other"));
}

#[test]
fn custom_threshold_and_extractor() {
    let words = ["a b", "b c", "c d", "a"];
    let table = build_frequency_table_with_threshold(&words, |w| w.split(' '), 2);

    assert_eq!(table.labels, vec!["a", "b", "Other"]);
    assert_eq!(table.counts, vec![2, 2, 3]);

    let empty: [&str; 0] = [];
    assert!(build_frequency_table(&empty, |w| w.split(' ')).is_empty());
}

#[test]
fn category_and_tag_distributions() {
    let projects = catalogue();
    let table = category_distribution(&projects);
    assert_eq!(table.labels, vec!["web", "tools", "mobile"]);
    assert_eq!(table.counts, vec![2, 2, 1]);

    let bundle = sample_bundle();
    let tags = tag_distribution(&bundle.blog_posts);
    assert_eq!(tags.labels, vec!["architecture", "rust", "charts"]);
    assert_eq!(tags.counts, vec![2, 1, 1]);
}

#[test]
fn project_query_reads_criteria_and_sort_from_a_query_string() {
    let query = actix_web::web::Query::<ProjectQuery>::from_query(
        "category=web&technology=React&q=dash&sort=name",
    )
    .unwrap()
    .into_inner();

    assert_eq!(
        query.criteria,
        FilterCriteria::default()
            .with_category("web")
            .with_technology("React")
            .with_query("dash")
    );
    assert_eq!(query.sort.as_deref(), Some("name"));

    let projects = catalogue();
    assert_eq!(titles(&query.run(&projects)), vec!["Élan Dashboard"]);
}
