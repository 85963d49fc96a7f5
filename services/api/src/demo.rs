use crate::infra::build_analysis_service;
use clap::Args;
use resume_score::config::AppConfig;
use resume_score::error::AppError;
use resume_score::resumes::{
    CandidateProfile, JobPosting, PersonalInfo, Project, WorkExperience,
};
use resume_score::scoring::ResumeScorer;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct AnalyzeArgs {
    /// Plain-text resume to score
    #[arg(long)]
    pub(crate) text_file: PathBuf,
}

/// Score a resume text file offline and print the report as pretty JSON.
pub(crate) fn run_analyze(args: AnalyzeArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let text = std::fs::read_to_string(&args.text_file)?;

    let scorer = ResumeScorer::new(config.vocabulary);
    let report = scorer.generate_score(&text);

    let rendered = serde_json::to_string_pretty(&report).map_err(std::io::Error::other)?;
    println!("{rendered}");
    Ok(())
}

/// Exercise the full pipeline against a built-in sample candidate and job.
pub(crate) fn run_demo() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let service = build_analysis_service(&config);

    println!("Resume scoring demo");
    println!("===================");

    let resume = service.register(sample_profile())?;
    println!("Registered resume #{}", resume.id.0);

    let score = service.analyze(resume.id)?;
    println!(
        "Overall {} (skills {}, readability {:.1}, grammar {})",
        score.report.overall_score,
        score.report.skills_score,
        score.report.readability_score,
        score.report.grammar_score
    );
    println!("Matched skills: {:?}", score.report.matched_skills);
    println!("Feedback:");
    println!("  skills:      {}", score.report.feedback.skills);
    println!("  readability: {}", score.report.feedback.readability);
    println!("  grammar:     {}", score.report.feedback.grammar);
    for error in &score.report.grammar_errors {
        println!("  issue: {} | {}", error.message, error.context);
    }

    let job = service.create_job(sample_job())?;
    let report = service.match_to_job(resume.id, job.id)?;
    println!(
        "\nMatch against '{}': {}% ({}/{} required skills)",
        job.posting.title, report.match_score, report.total_matched, report.total_required
    );
    if !report.missing_skills.is_empty() {
        println!("Missing: {:?}", report.missing_skills);
    }

    Ok(())
}

fn sample_profile() -> CandidateProfile {
    CandidateProfile {
        personal_info: PersonalInfo {
            name: "Jordan Sample".to_string(),
            email: Some("jordan@example.com".to_string()),
            phone: None,
            location: Some("Cedar Rapids, IA".to_string()),
            linkedin_url: None,
        },
        summary: Some(
            "Backend engineer focused on data infrastructure. Comfortable across \
             Python, SQL, and Docker based stacks."
                .to_string(),
        ),
        skills: vec![
            "Python".to_string(),
            "SQL".to_string(),
            "Docker".to_string(),
            "Machine Learning".to_string(),
        ],
        work_experiences: vec![WorkExperience {
            company: "Globex".to_string(),
            job_title: "Senior Data Engineer".to_string(),
            start_date: Some("2020-06".to_string()),
            end_date: None,
            description: Some(
                "Designed the ingestion platform and cut warehouse load times in half."
                    .to_string(),
            ),
        }],
        projects: vec![Project {
            name: "forecasting".to_string(),
            description: Some(
                "Demand forecasting models served behind a REST API.".to_string(),
            ),
            technologies: Some("python, scikit-learn".to_string()),
        }],
        educations: Vec::new(),
    }
}

fn sample_job() -> JobPosting {
    JobPosting {
        title: "Platform Engineer".to_string(),
        company: "Initech".to_string(),
        description: "Own the data platform end to end.".to_string(),
        required_skills: vec![
            "python".to_string(),
            "docker".to_string(),
            "kubernetes".to_string(),
        ],
    }
}
