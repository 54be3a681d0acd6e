#![allow(dead_code)]

use chrono::NaiveDate;
use portfolio_showcase::{
    content::{RecordBundle, RecordStore},
    entities::{
        blog_post::{Author, BlogPost},
        contact_me::ContactSubmission,
        project::Project,
        skill::{Skill, SkillCategory},
        testimonial::Testimonial,
        timeline::{EndDate, TimelineEvent, TimelineEventType},
    },
};

pub fn project(id: &str, title: &str, year: i32, category: &str) -> Project {
    Project {
        id: id.to_string(),
        title: title.to_string(),
        slug: format!("project-{}", id),
        description: String::new(),
        long_description: String::new(),
        cover_image: format!("/images/{}.png", id),
        images: Vec::new(),
        tags: Vec::new(),
        technologies: Vec::new(),
        demo_url: None,
        github_url: None,
        video_url: None,
        year,
        category: category.to_string(),
        featured: false,
        in_progress: false,
    }
}

pub fn project_with(
    id: &str,
    title: &str,
    year: i32,
    category: &str,
    description: &str,
    tags: &[&str],
    technologies: &[&str],
) -> Project {
    Project {
        description: description.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        technologies: technologies.iter().map(|t| t.to_string()).collect(),
        ..project(id, title, year, category)
    }
}

/// "Shop App" and "Blog Tool": both mention "shop", in opposite year order.
pub fn shop_and_blog() -> Vec<Project> {
    vec![
        project_with("1", "Shop App", 2021, "web", "A storefront", &["cart"], &["React"]),
        project_with("2", "Blog Tool", 2023, "tools", "shop cart exists", &["markdown"], &["Rust"]),
    ]
}

pub fn catalogue() -> Vec<Project> {
    let mut featured = project_with(
        "3", "Élan Dashboard", 2022, "web", "Realtime metrics", &["charts"], &["React", "Go"],
    );
    featured.featured = true;

    let mut projects = shop_and_blog();
    projects.push(featured);
    projects.push(project_with(
        "4", "apex Mobile", 2023, "mobile", "Offline maps", &["maps"], &["React Native"],
    ));
    projects.push(project_with(
        "5", "Infra Kit", 2020, "tools", "CI templates", &["ci"], &["Terraform", "Docker"],
    ));
    projects
}

pub fn blog_post(id: &str, slug: &str, content: &str, tags: &[&str]) -> BlogPost {
    BlogPost {
        id: id.to_string(),
        title: format!("Post {}", id),
        slug: slug.to_string(),
        excerpt: "An excerpt".to_string(),
        content: content.to_string(),
        cover_image: "/images/post.png".to_string(),
        publish_date: NaiveDate::from_ymd_opt(2024, 3, 12).unwrap(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        author: Author {
            name: "Alex Doe".to_string(),
            avatar: "/images/avatar.png".to_string(),
            bio: None,
        },
        reading_time: 1,
    }
}

pub fn timeline_event(id: &str, event_type: TimelineEventType, start: &str, end: Option<&str>) -> TimelineEvent {
    TimelineEvent {
        id: id.to_string(),
        title: format!("Event {}", id),
        event_type,
        organization: None,
        location: None,
        start_date: start.parse().unwrap(),
        end_date: end.map(|e| e.parse::<EndDate>().unwrap()),
        description: "Something happened".to_string(),
        details: None,
        skills: None,
        image: None,
        url: None,
        is_milestone: false,
    }
}

pub fn skill(name: &str, level: u8, category: SkillCategory) -> Skill {
    Skill {
        name: name.to_string(),
        level,
        category,
        icon: None,
    }
}

pub fn testimonial(id: &str, rating: u8) -> Testimonial {
    Testimonial {
        id: id.to_string(),
        name: "Sam Lee".to_string(),
        role: "Manager".to_string(),
        company: "Widget Co".to_string(),
        avatar: "/images/sam.png".to_string(),
        content: "Great to work with.".to_string(),
        rating,
    }
}

pub fn valid_submission() -> ContactSubmission {
    ContactSubmission {
        name: "Jane Doe".to_string(),
        email: "jane@example.com".to_string(),
        subject: "Hello".to_string(),
        message: "I would like to talk about a project.".to_string(),
    }
}

pub fn sample_bundle() -> RecordBundle {
    RecordBundle {
        projects: catalogue(),
        blog_posts: vec![
            blog_post("b1", "first-post", "Filtering **in memory**.", &["architecture", "rust"]),
            blog_post("b2", "second-post", "State machines for forms.", &["architecture"]),
            blog_post("b3", "third-post", "Charts and slices.", &["charts"]),
        ],
        timeline: vec![
            timeline_event("t1", TimelineEventType::Education, "2016-09", Some("2020-07")),
            timeline_event("t2", TimelineEventType::Work, "2020-09", Some("2022-03")),
            TimelineEvent {
                is_milestone: true,
                ..timeline_event("t3", TimelineEventType::Work, "2022-04", Some("present"))
            },
            timeline_event("t4", TimelineEventType::Award, "2022-11", None),
        ],
        testimonials: vec![testimonial("r1", 5), testimonial("r2", 4)],
        skills: vec![
            skill("React", 90, SkillCategory::Frontend),
            skill("CSS", 80, SkillCategory::Frontend),
            skill("Svelte", 60, SkillCategory::Frontend),
            skill("TypeScript", 88, SkillCategory::Frontend),
            skill("Rust", 85, SkillCategory::Backend),
            skill("Go", 75, SkillCategory::Backend),
            skill("Docker", 78, SkillCategory::Devops),
            skill("Figma", 70, SkillCategory::Design),
        ],
    }
}

pub fn sample_store() -> RecordStore {
    RecordStore::try_from(sample_bundle()).expect("sample bundle is valid")
}
