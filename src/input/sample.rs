//! Bundled sample resume for demos and smoke tests

pub const SAMPLE_RESUME: &str = "John Doe
Software Engineer

EXPERIENCE
Senior Software Engineer | Tech Corp | 2020-2024
• Developed scalable web applications using React and Node.js
• Led a team of 5 developers on critical projects
• Implemented CI/CD pipelines using Jenkins and Docker
• Reduced application load time by 40% through optimization

Software Engineer | StartupXYZ | 2018-2020
• Built RESTful APIs using Python and Flask
• Collaborated with cross-functional teams
• Managed database migrations and optimizations
• Contributed to open-source projects

EDUCATION
Bachelor of Science in Computer Science | University of Technology | 2018

SKILLS
Frontend: React, JavaScript, TypeScript, HTML, CSS
Backend: Node.js, Python, Flask, Express
Database: PostgreSQL, MongoDB, Redis
DevOps: Docker, Jenkins, AWS, Git
Other: Agile, Scrum, Unit Testing";

pub fn sample_resume_text() -> &'static str {
    log::warn!("Using the bundled sample resume instead of a real document");
    SAMPLE_RESUME
}
