// Résumé extraction prompt templates.

pub const RESUME_EXTRACT_SYSTEM: &str = "\
You are a precise resume data extractor. \
Read the attached resume and return its contents as structured JSON. \
You MUST respond with valid JSON only — no markdown fences, no explanations.";

pub const RESUME_EXTRACT_PROMPT: &str = r#"Analyze the attached resume and extract the contact information, skills, professional experience, and education.
If any information is not found (e.g., LinkedIn), return null.

EXAMPLE of the extracted information:

contact[1]{name, email, phone, address, linkedIn}
  Jhon, jhon@me.com, 1234567890, New York - USA, https://linkedin.com/in/jhon
skills[3]: git, docker, node
experience[2]{role, company, startDate, endDate}
  Software Engineer, Google, 2022-01-01, 2023-01-01
education[1]{institution, degree, startDate, endDate}
  University of New York, Bachelor in Computer Science, 2018-01-01, 2022-01-01

OUTPUT SCHEMA (return exactly this structure):
{
  "contact": {
    "name": "string" | null,
    "email": "string" | null,
    "phone": "string" | null,
    "address": "string" | null,
    "linkedIn": "string" | null
  },
  "skills": ["string"],
  "experience": [
    { "role": "string" | null, "company": "string" | null, "startDate": "YYYY-MM-DD" | null, "endDate": "YYYY-MM-DD" | null }
  ],
  "education": [
    { "institution": "string" | null, "degree": "string" | null, "startDate": "YYYY-MM-DD" | null, "endDate": "YYYY-MM-DD" | null }
  ],
  "recomendations": ["string"]
}

RULES:
1. Use an empty list when a resume has no skills, experience, or education.
2. "recomendations" lists 5 things you would recommend the candidate do to improve the resume. Write them in Brazilian Portuguese (PT-BR) only.
3. Return ONLY the JSON object — nothing else, no code fences."#;
