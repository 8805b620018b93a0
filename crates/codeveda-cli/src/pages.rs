//! Plain-text rendering of each page.

use std::fmt::Write;

use codeveda_core::models::{
    resource_types, BeginnerGuide, BlogPost, BlogsDocument, ContactDocument, DsaSheet,
    HomeDocument, Project, ProjectsDocument, Question, Resource, ResourcesDocument,
    RoadmapsDocument, SocialLink,
};
use codeveda_core::progress::{ProgressMap, ProgressRecord, ProgressStats};
use codeveda_core::utils::{format_date, percent, truncate_string};

/// Max excerpt width in listings
const EXCERPT_WIDTH: usize = 80;

/// Tags shown per card before "+N"
const CARD_TAGS: usize = 3;

// `write!` into a String cannot fail, so results below are ignored.

pub fn render_load_failure(message: &str) -> String {
    format!(
        "Failed to load content\nPlease try again later.\n({})\n",
        message
    )
}

fn tag_summary(tags: &[String]) -> String {
    let mut out = tags
        .iter()
        .take(CARD_TAGS)
        .map(|t| format!("#{}", t))
        .collect::<Vec<_>>()
        .join(" ");
    if tags.len() > CARD_TAGS {
        let _ = write!(out, " +{}", tags.len() - CARD_TAGS);
    }
    out
}

fn render_social_links(out: &mut String, links: &[SocialLink]) {
    if links.is_empty() {
        return;
    }
    let _ = writeln!(out, "\nJoin Our Community");
    for link in links {
        let _ = write!(out, "  {:<10} {}", link.platform, link.url);
        if let Some(audience) = link.audience() {
            let _ = write!(out, " ({})", audience);
        }
        let _ = writeln!(out);
    }
}

pub fn render_home(home: &HomeDocument) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", home.hero.title);
    let _ = writeln!(out, "{}\n", home.hero.tagline);
    let _ = writeln!(out, "{}", home.hero.description);
    if !home.hero.cta.is_empty() {
        let _ = writeln!(out, "-> {}", home.hero.cta);
    }
    if !home.highlights.is_empty() {
        let _ = writeln!(out);
    }
    for highlight in &home.highlights {
        let _ = writeln!(out, "* {}: {}", highlight.title, highlight.description);
    }
    render_social_links(&mut out, &home.social_links);
    out
}

fn checkbox(record: &ProgressRecord) -> &'static str {
    if record.completed {
        "[x]"
    } else {
        "[ ]"
    }
}

pub fn question_line(question: &Question, record: &ProgressRecord) -> String {
    let star = if record.starred { "*" } else { " " };
    format!(
        "{} {} #{:<4} {:<40} {}",
        checkbox(record),
        star,
        question.id,
        truncate_string(&question.name, 40),
        question.difficulty
    )
}

fn tier_line(label: &str, done: usize, total: u32) -> String {
    format!(
        "{:<7} {:>4} / {:<4} ({:.0}%)",
        label,
        done,
        total,
        percent(done, total as usize)
    )
}

/// `sheet` supplies headings and totals, `visible` the filtered questions.
pub fn render_dsa(
    sheet: &DsaSheet,
    visible: &DsaSheet,
    stats: &ProgressStats,
    progress: &ProgressMap,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", sheet.title);
    let _ = writeln!(out, "{}", sheet.description);
    if !sheet.note.is_empty() {
        let _ = writeln!(out, "! {}", sheet.note);
    }

    let total = if sheet.total_questions > 0 {
        sheet.total_questions
    } else {
        stats.total as u32
    };
    let summary = &sheet.progress_summary;
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", tier_line("Total", stats.completed, total));
    let _ = writeln!(out, "{}", tier_line("Easy", stats.easy, summary.easy.total));
    let _ = writeln!(out, "{}", tier_line("Medium", stats.medium, summary.medium.total));
    let _ = writeln!(out, "{}", tier_line("Hard", stats.hard, summary.hard.total));

    if visible.steps.is_empty() {
        let _ = writeln!(out, "\nNo questions match your filters.");
        return out;
    }

    for step in &visible.steps {
        let _ = writeln!(out, "\nStep {}: {}", step.id, step.title);
        for lecture in &step.lectures {
            let _ = writeln!(out, "  {} ({})", lecture.title, lecture.questions.len());
            for question in &lecture.questions {
                let record = progress.get(&question.id).copied().unwrap_or_default();
                let _ = writeln!(out, "    {}", question_line(question, &record));
            }
        }
    }
    out
}

pub fn render_blog_list(blogs: &BlogsDocument, posts: &[BlogPost]) -> String {
    let mut out = String::new();
    let categories: Vec<String> = blogs
        .categories
        .iter()
        .map(|c| format!("{} ({})", c.name, c.count))
        .collect();
    if !categories.is_empty() {
        let _ = writeln!(out, "Categories: {}\n", categories.join(", "));
    }

    if posts.is_empty() {
        let _ = writeln!(out, "No posts found. Try adjusting your search or category.");
        return out;
    }

    for post in posts {
        let featured = if post.featured { " [featured]" } else { "" };
        let _ = writeln!(out, "#{} {}{}", post.id, post.title, featured);
        let _ = writeln!(
            out,
            "   {} | {} | {} | {}",
            post.category,
            format_date(&post.date),
            post.read_time,
            post.author
        );
        let _ = writeln!(out, "   {}", truncate_string(&post.excerpt, EXCERPT_WIDTH));
        if !post.tags.is_empty() {
            let _ = writeln!(out, "   {}", tag_summary(&post.tags));
        }
    }
    out
}

pub fn render_blog_post(post: &BlogPost) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", post.title);
    let _ = writeln!(
        out,
        "{} | {} | {} | {}\n",
        post.category,
        format_date(&post.date),
        post.read_time,
        post.author
    );
    for paragraph in post.paragraphs() {
        let _ = writeln!(out, "{}\n", paragraph);
    }
    if !post.tags.is_empty() {
        let tags: Vec<String> = post.tags.iter().map(|t| format!("#{}", t)).collect();
        let _ = writeln!(out, "{}", tags.join(" "));
    }
    out
}

pub fn render_resources(doc: &ResourcesDocument, visible: &[&Resource]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}\n{}", doc.title, doc.description);
    let _ = writeln!(out, "Types: {}\n", resource_types(&doc.resources).join(", "));

    if visible.is_empty() {
        let _ = writeln!(out, "No resources found. Try adjusting your search or filter criteria.");
        return out;
    }
    for resource in visible {
        let _ = writeln!(out, "[{}] {}", resource.kind, resource.name);
        let _ = writeln!(out, "   {}", resource.description);
        if !resource.url.is_empty() {
            let _ = writeln!(out, "   {}", resource.url);
        }
        if !resource.tags.is_empty() {
            let _ = writeln!(out, "   {}", tag_summary(&resource.tags));
        }
    }
    out
}

pub fn render_projects(doc: &ProjectsDocument, visible: &[&Project]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}\n{}\n", doc.title, doc.description);

    if visible.is_empty() {
        let _ = writeln!(out, "No projects found. Try adjusting your search or filter criteria.");
        return out;
    }
    for project in visible {
        let _ = writeln!(
            out,
            "{} ({}, {})",
            project.name, project.difficulty, project.category
        );
        let _ = writeln!(out, "   {}", project.description);
        if !project.technologies.is_empty() {
            let _ = writeln!(out, "   Tech: {}", project.technologies.join(", "));
        }
        for feature in project.features.iter().take(CARD_TAGS) {
            let _ = writeln!(out, "   - {}", feature);
        }
        if let Some(ref link) = project.github_link {
            let _ = writeln!(out, "   Code: {}", link);
        }
        if let Some(ref link) = project.demo_link {
            let _ = writeln!(out, "   Demo: {}", link);
        }
    }
    out
}

pub fn render_roadmaps(doc: &RoadmapsDocument) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}\n{}", doc.title, doc.description);

    for roadmap in &doc.career_roadmaps {
        let _ = writeln!(
            out,
            "\n{} [{}] - {}",
            roadmap.title, roadmap.difficulty, roadmap.timeline
        );
        let _ = writeln!(out, "   {}", roadmap.description);
        if !roadmap.skills.is_empty() {
            let _ = writeln!(out, "   Skills: {}", roadmap.skills.join(", "));
        }
        if let Some(ref path) = roadmap.detailed_path {
            for (i, phase) in path.phases.iter().enumerate() {
                let _ = writeln!(out, "   Phase {}: {} ({})", i + 1, phase.title, phase.duration);
            }
        } else {
            for resource in &roadmap.resources {
                let _ = writeln!(out, "   {}: {}", resource.phase, resource.items.join(", "));
            }
        }
    }

    if !doc.beginner_guides.is_empty() {
        let _ = writeln!(out, "\nBeginner Guides");
    }
    for guide in &doc.beginner_guides {
        let _ = writeln!(out, "\n{} ({}) - {}", guide.title, guide.id, guide.read_time);
        let (shown, more) = guide.step_preview();
        for (i, step) in shown.iter().enumerate() {
            let _ = writeln!(out, "   {}. {}", i + 1, step);
        }
        if more > 0 {
            let _ = writeln!(out, "   +{} more steps", more);
        }
    }
    out
}

pub fn render_guide(guide: &BeginnerGuide) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", guide.title);
    let _ = writeln!(
        out,
        "By {}, {} | {}\n",
        guide.author, guide.author_title, guide.read_time
    );
    let _ = writeln!(out, "{}", guide.description);

    if let Some(ref content) = guide.detailed_content {
        if !content.introduction.is_empty() {
            let _ = writeln!(out, "\n{}", content.introduction);
        }
        for section in &content.sections {
            let _ = writeln!(out, "\n## {}\n", section.title);
            for paragraph in section.content.split("\n\n") {
                let _ = writeln!(out, "{}\n", paragraph.trim());
            }
        }
        if !content.conclusion.is_empty() {
            let _ = writeln!(out, "{}", content.conclusion);
        }
    }

    if !guide.steps.is_empty() {
        let _ = writeln!(out, "\nSteps");
        for (i, step) in guide.steps.iter().enumerate() {
            let _ = writeln!(out, "  {}. {}", i + 1, step);
        }
    }
    if !guide.achievements.is_empty() {
        let _ = writeln!(out, "\nWhat you'll achieve");
        for achievement in &guide.achievements {
            let _ = writeln!(out, "  - {}", achievement);
        }
    }
    out
}

pub fn render_contact(doc: &ContactDocument) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}\n{}\n", doc.title, doc.description);

    let info = &doc.contact_info;
    let _ = writeln!(out, "Email: {}", info.email);
    if !info.response.is_empty() {
        let _ = writeln!(out, "       {}", info.response);
    }
    if !info.availability.is_empty() {
        let _ = writeln!(out, "Availability: {}", info.availability);
    }

    let stats = &doc.community_stats;
    let _ = writeln!(
        out,
        "\nMembers {} | Monthly views {} | Content {} | Success stories {}",
        stats.total_members, stats.monthly_views, stats.content_pieces, stats.success_stories
    );

    for opportunity in [
        &doc.business_opportunities.sponsorship,
        &doc.business_opportunities.partnerships,
    ] {
        if opportunity.title.is_empty() {
            continue;
        }
        let _ = writeln!(out, "\n{}\n{}", opportunity.title, opportunity.description);
        for item in &opportunity.benefits {
            let _ = writeln!(out, "  - {}", item);
        }
    }
    render_social_links(&mut out, &doc.social_links);
    out
}
