//! Curated mock records mirroring the seeded portal content.
//!
//! Field values are the portal's fixture data verbatim; tests depend on
//! the first ten alumni, the five posts and the five jobs.

use crate::model::alumni::{Alumni, Experience, VerificationStatus};
use crate::model::circular::{Circular, CircularStatus, Priority};
use crate::model::event::{Event, EventCategory};
use crate::model::job::{Job, JobStatus, JobType};
use crate::model::notification::{Notification, NotificationKind};
use crate::model::post::{Comment, Post, Visibility};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn profile(
    id: &str,
    name: &str,
    email: &str,
    batch: &str,
    department: &str,
    company: &str,
    designation: &str,
    phone: &str,
    roll_number: &str,
    degree: &str,
    skills: &[&str],
    bio: &str,
    location: &str,
    status: VerificationStatus,
    registration_date: &str,
) -> Alumni {
    Alumni {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        avatar: None,
        batch: batch.to_string(),
        department: department.to_string(),
        company: company.to_string(),
        designation: designation.to_string(),
        phone: phone.to_string(),
        roll_number: roll_number.to_string(),
        graduation_year: batch.to_string(),
        degree: degree.to_string(),
        skills: strings(skills),
        bio: bio.to_string(),
        location: location.to_string(),
        linkedin: None,
        github: None,
        is_verified: status == VerificationStatus::Verified,
        status,
        registration_date: registration_date.to_string(),
        experience: Vec::new(),
    }
}

pub(crate) fn curated_alumni() -> Vec<Alumni> {
    let mut john = profile(
        "1",
        "John Smith",
        "john@alumni.com",
        "2020",
        "Computer Science",
        "Google",
        "Software Engineer",
        "+1234567890",
        "CS2020001",
        "B.Tech",
        &["React", "Node.js", "Python", "Machine Learning"],
        "Passionate software engineer with 4 years of experience in building scalable applications.",
        "San Francisco, CA",
        VerificationStatus::Verified,
        "2024-01-15",
    );
    john.linkedin = Some("linkedin.com/in/johnsmith".to_string());
    john.github = Some("github.com/johnsmith".to_string());
    john.experience = vec![
        Experience {
            id: "1".to_string(),
            company: "Google".to_string(),
            role: "Software Engineer".to_string(),
            start_date: "2022-06".to_string(),
            end_date: None,
            current: true,
            description: "Building cloud infrastructure".to_string(),
        },
        Experience {
            id: "2".to_string(),
            company: "Microsoft".to_string(),
            role: "Junior Developer".to_string(),
            start_date: "2020-07".to_string(),
            end_date: Some("2022-05".to_string()),
            current: false,
            description: "Developed enterprise applications".to_string(),
        },
    ];

    let mut sarah = profile(
        "2",
        "Sarah Johnson",
        "sarah@alumni.com",
        "2019",
        "Electrical Engineering",
        "Tesla",
        "Product Manager",
        "+1234567891",
        "EE2019001",
        "B.Tech",
        &["Product Management", "Agile", "Data Analysis", "EV Systems"],
        "Product manager focused on electric vehicle innovation and sustainable technology.",
        "Austin, TX",
        VerificationStatus::Verified,
        "2024-02-01",
    );
    sarah.experience = vec![Experience {
        id: "1".to_string(),
        company: "Tesla".to_string(),
        role: "Product Manager".to_string(),
        start_date: "2021-03".to_string(),
        end_date: None,
        current: true,
        description: "Leading EV battery product line".to_string(),
    }];

    vec![
        john,
        sarah,
        profile(
            "3",
            "Michael Chen",
            "michael.chen@alumni.com",
            "2018",
            "Mechanical Engineering",
            "Boeing",
            "Aerospace Engineer",
            "+1234567892",
            "ME2018015",
            "M.Tech",
            &["CAD", "Aerodynamics", "Simulation", "Project Management"],
            "Aerospace engineer specializing in aircraft design and aerodynamics.",
            "Seattle, WA",
            VerificationStatus::Verified,
            "2024-01-20",
        ),
        profile(
            "4",
            "Emily Williams",
            "emily.w@alumni.com",
            "2021",
            "Computer Science",
            "Meta",
            "Data Scientist",
            "+1234567893",
            "CS2021042",
            "B.Tech",
            &["Python", "TensorFlow", "SQL", "Statistics", "Deep Learning"],
            "Data scientist passionate about machine learning and AI research.",
            "Menlo Park, CA",
            VerificationStatus::Verified,
            "2024-02-15",
        ),
        profile(
            "5",
            "David Kumar",
            "david.kumar@alumni.com",
            "2017",
            "Civil Engineering",
            "AECOM",
            "Senior Civil Engineer",
            "+1234567894",
            "CE2017008",
            "B.Tech",
            &["AutoCAD", "Structural Analysis", "Project Planning", "BIM"],
            "Senior civil engineer with expertise in infrastructure development.",
            "New York, NY",
            VerificationStatus::Verified,
            "2024-01-10",
        ),
        profile(
            "6",
            "Jessica Lee",
            "jessica.lee@alumni.com",
            "2022",
            "Information Technology",
            "Amazon",
            "Cloud Solutions Architect",
            "+1234567895",
            "IT2022003",
            "B.Tech",
            &["AWS", "Cloud Architecture", "DevOps", "Kubernetes"],
            "Cloud architect helping companies scale their infrastructure.",
            "Seattle, WA",
            VerificationStatus::Pending,
            "2024-03-01",
        ),
        profile(
            "7",
            "Robert Martinez",
            "robert.m@alumni.com",
            "2016",
            "Electronics",
            "NVIDIA",
            "Hardware Engineer",
            "+1234567896",
            "EC2016021",
            "M.Tech",
            &["VLSI", "GPU Architecture", "Embedded Systems"],
            "Hardware engineer working on next-gen GPU technology.",
            "Santa Clara, CA",
            VerificationStatus::Verified,
            "2024-01-25",
        ),
        profile(
            "8",
            "Amanda Brown",
            "amanda.b@alumni.com",
            "2020",
            "Computer Science",
            "Stripe",
            "Backend Engineer",
            "+1234567897",
            "CS2020018",
            "B.Tech",
            &["Ruby", "Go", "Payments", "API Design"],
            "Backend engineer building payment infrastructure at scale.",
            "San Francisco, CA",
            VerificationStatus::Verified,
            "2024-02-05",
        ),
        profile(
            "9",
            "Thomas Wilson",
            "thomas.w@alumni.com",
            "2019",
            "Chemical Engineering",
            "ExxonMobil",
            "Process Engineer",
            "+1234567898",
            "CH2019005",
            "B.Tech",
            &["Process Simulation", "Chemical Process Design", "Safety Engineering"],
            "Process engineer optimizing refinery operations.",
            "Houston, TX",
            VerificationStatus::Pending,
            "2024-03-05",
        ),
        profile(
            "10",
            "Priya Sharma",
            "priya.sharma@alumni.com",
            "2021",
            "Computer Science",
            "Netflix",
            "UI Engineer",
            "+1234567899",
            "CS2021007",
            "B.Tech",
            &["React", "TypeScript", "CSS", "Animation", "A/B Testing"],
            "UI engineer crafting delightful streaming experiences.",
            "Los Gatos, CA",
            VerificationStatus::Verified,
            "2024-02-10",
        ),
    ]
}

fn comment(id: &str, user_id: &str, user_name: &str, content: &str, created_at: &str) -> Comment {
    Comment {
        id: id.to_string(),
        user_id: user_id.to_string(),
        user_name: user_name.to_string(),
        user_avatar: None,
        content: content.to_string(),
        created_at: created_at.to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
fn post(
    id: &str,
    user_id: &str,
    user_name: &str,
    user_company: &str,
    user_designation: &str,
    content: &str,
    likes: &[&str],
    comments: Vec<Comment>,
    created_at: &str,
) -> Post {
    Post {
        id: id.to_string(),
        user_id: user_id.to_string(),
        user_name: user_name.to_string(),
        user_avatar: None,
        user_company: user_company.to_string(),
        user_designation: user_designation.to_string(),
        content: content.to_string(),
        images: Vec::new(),
        likes: strings(likes),
        comments,
        visibility: Visibility::Public,
        created_at: created_at.to_string(),
    }
}

pub(crate) fn curated_posts() -> Vec<Post> {
    vec![
        post(
            "1",
            "1",
            "John Smith",
            "Google",
            "Software Engineer",
            "Just completed a major milestone at work! Our team successfully launched a new feature that improves search performance by 40%. Grateful for the amazing team and the learning opportunities. #Tech #Engineering #Google",
            &["2", "3", "4", "5", "6"],
            vec![
                comment(
                    "1",
                    "2",
                    "Sarah Johnson",
                    "Congratulations John! That's an incredible achievement!",
                    "2024-03-10T09:30:00",
                ),
                comment(
                    "2",
                    "4",
                    "Emily Williams",
                    "Amazing work! Would love to hear more about the technical challenges.",
                    "2024-03-10T10:15:00",
                ),
            ],
            "2024-03-10T08:00:00",
        ),
        post(
            "2",
            "2",
            "Sarah Johnson",
            "Tesla",
            "Product Manager",
            "Excited to share that we're hiring! Looking for talented engineers to join our EV team at Tesla. If you're passionate about sustainable energy and innovation, reach out! #Hiring #Tesla #EV",
            &["1", "3", "7", "8"],
            vec![comment(
                "1",
                "6",
                "Jessica Lee",
                "This is great! Just submitted my application!",
                "2024-03-09T14:00:00",
            )],
            "2024-03-09T12:00:00",
        ),
        post(
            "3",
            "4",
            "Emily Williams",
            "Meta",
            "Data Scientist",
            "Just published my first research paper on deep learning applications in social media analytics! It's been a journey of late nights and countless experiments. Thanks to everyone who supported me. Link in comments!",
            &["1", "2", "5", "6", "7", "8", "10"],
            vec![
                comment(
                    "1",
                    "1",
                    "John Smith",
                    "Incredible work Emily! Can't wait to read it.",
                    "2024-03-08T16:30:00",
                ),
                comment(
                    "2",
                    "3",
                    "Michael Chen",
                    "Congratulations! This is a huge accomplishment!",
                    "2024-03-08T17:00:00",
                ),
            ],
            "2024-03-08T15:00:00",
        ),
        post(
            "4",
            "10",
            "Priya Sharma",
            "Netflix",
            "UI Engineer",
            "Reflecting on my journey from campus to Netflix... 3 years ago, I was just another student dreaming of working in tech. Today, I'm building interfaces used by millions. Never stop believing in yourself! #Journey #Netflix #TechCareer",
            &["1", "2", "3", "4", "5", "6", "7", "8", "9"],
            vec![comment(
                "1",
                "2",
                "Sarah Johnson",
                "Such an inspiring story Priya! You deserve all the success!",
                "2024-03-07T11:00:00",
            )],
            "2024-03-07T10:00:00",
        ),
        post(
            "5",
            "3",
            "Michael Chen",
            "Boeing",
            "Aerospace Engineer",
            "Had an amazing time mentoring students at our college's career fair yesterday! It was surreal being back on campus. To all current students - make the most of your college years, network actively, and never stop learning. The industry needs fresh perspectives!",
            &["1", "4", "5", "8"],
            Vec::new(),
            "2024-03-06T18:00:00",
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn job(
    id: &str,
    title: &str,
    company: &str,
    location: &str,
    job_type: JobType,
    experience: &str,
    skills: &[&str],
    salary: &str,
    description: &str,
    requirements: &[&str],
    posted_by: &str,
    posted_by_name: &str,
    application_deadline: &str,
    applications_count: u32,
    created_at: &str,
) -> Job {
    Job {
        id: id.to_string(),
        title: title.to_string(),
        company: company.to_string(),
        location: location.to_string(),
        job_type,
        experience: experience.to_string(),
        skills: strings(skills),
        salary: Some(salary.to_string()),
        description: description.to_string(),
        requirements: strings(requirements),
        posted_by: posted_by.to_string(),
        posted_by_name: posted_by_name.to_string(),
        application_deadline: application_deadline.to_string(),
        applications_count,
        status: JobStatus::Active,
        created_at: created_at.to_string(),
    }
}

pub(crate) fn curated_jobs() -> Vec<Job> {
    vec![
        job(
            "1",
            "Senior Software Engineer",
            "Google",
            "Mountain View, CA",
            JobType::FullTime,
            "5+ years",
            &["Java", "Python", "Distributed Systems", "Cloud"],
            "$180,000 - $250,000",
            "Join our team to build next-generation cloud infrastructure. You will work on large-scale distributed systems serving billions of users.",
            &[
                "5+ years of software engineering experience",
                "Strong CS fundamentals",
                "Experience with distributed systems",
                "Excellent communication skills",
            ],
            "admin",
            "Admin",
            "2024-04-15",
            42,
            "2024-03-01",
        ),
        job(
            "2",
            "Product Manager",
            "Tesla",
            "Austin, TX",
            JobType::FullTime,
            "3-5 years",
            &["Product Management", "Agile", "EV Industry", "Data Analysis"],
            "$150,000 - $200,000",
            "Lead product development for our next-generation electric vehicles. Work with engineering and design teams to deliver innovative features.",
            &[
                "3+ years PM experience",
                "Technical background preferred",
                "Passion for EVs",
                "Strong analytical skills",
            ],
            "2",
            "Sarah Johnson",
            "2024-04-20",
            28,
            "2024-03-05",
        ),
        job(
            "3",
            "Data Scientist",
            "Meta",
            "Menlo Park, CA",
            JobType::FullTime,
            "2-4 years",
            &["Python", "Machine Learning", "SQL", "Deep Learning", "Statistics"],
            "$140,000 - $190,000",
            "Apply machine learning to solve complex problems in social media analytics. Build models that impact billions of users.",
            &[
                "MS/PhD in CS, Statistics, or related field",
                "Strong ML fundamentals",
                "Experience with PyTorch/TensorFlow",
                "Published research is a plus",
            ],
            "admin",
            "Admin",
            "2024-04-10",
            67,
            "2024-02-28",
        ),
        job(
            "4",
            "Frontend Developer Intern",
            "Netflix",
            "Remote",
            JobType::Internship,
            "0-1 years",
            &["React", "TypeScript", "CSS", "JavaScript"],
            "$50/hour",
            "Join our UI team for a summer internship. Work on real features used by millions of Netflix users worldwide.",
            &[
                "Currently pursuing CS degree",
                "Strong React skills",
                "Eye for design",
                "Available for 12-week internship",
            ],
            "10",
            "Priya Sharma",
            "2024-03-30",
            156,
            "2024-03-08",
        ),
        job(
            "5",
            "Cloud Solutions Architect",
            "Amazon",
            "Seattle, WA",
            JobType::FullTime,
            "5+ years",
            &["AWS", "Cloud Architecture", "DevOps", "Kubernetes", "Terraform"],
            "$160,000 - $220,000",
            "Design and implement cloud solutions for enterprise clients. Lead technical discussions and architecture reviews.",
            &[
                "5+ years cloud experience",
                "AWS certifications preferred",
                "Strong communication skills",
                "Customer-facing experience",
            ],
            "admin",
            "Admin",
            "2024-04-25",
            35,
            "2024-03-02",
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn event(
    id: &str,
    title: &str,
    description: &str,
    date: &str,
    time: &str,
    venue: &str,
    category: EventCategory,
    max_attendees: u32,
    current_attendees: u32,
    rsvp_deadline: &str,
    registered_users: &[&str],
) -> Event {
    Event {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        date: date.to_string(),
        time: time.to_string(),
        venue: venue.to_string(),
        category,
        max_attendees,
        current_attendees,
        rsvp_deadline: rsvp_deadline.to_string(),
        banner: None,
        registered_users: strings(registered_users),
    }
}

pub(crate) fn curated_events() -> Vec<Event> {
    vec![
        event(
            "1",
            "Annual Alumni Reunion 2024",
            "Join us for the biggest alumni gathering of the year! Reconnect with old friends, make new connections, and celebrate our shared legacy.",
            "2024-04-15",
            "10:00 AM - 6:00 PM",
            "Main Campus Auditorium",
            EventCategory::Reunion,
            500,
            342,
            "2024-04-10",
            &["1", "2", "3", "4", "5"],
        ),
        event(
            "2",
            "Tech Industry Workshop",
            "Learn about the latest trends in technology from industry experts. Topics include AI, Cloud Computing, and Blockchain.",
            "2024-03-25",
            "2:00 PM - 5:00 PM",
            "Virtual (Zoom)",
            EventCategory::Workshop,
            200,
            156,
            "2024-03-23",
            &["1", "4", "6", "8"],
        ),
        event(
            "3",
            "Career Guidance Seminar",
            "Senior alumni share their career journeys and offer guidance for recent graduates entering the job market.",
            "2024-04-05",
            "11:00 AM - 1:00 PM",
            "Conference Hall B",
            EventCategory::Seminar,
            100,
            78,
            "2024-04-03",
            &["2", "3", "7"],
        ),
        event(
            "4",
            "Alumni Cricket Tournament",
            "Annual cricket tournament for alumni. Form your batch teams and compete for the coveted Alumni Trophy!",
            "2024-05-01",
            "8:00 AM - 6:00 PM",
            "Sports Ground",
            EventCategory::Sports,
            120,
            64,
            "2024-04-25",
            &["3", "5", "7", "9"],
        ),
    ]
}

pub(crate) fn curated_circulars() -> Vec<Circular> {
    vec![
        Circular {
            id: "1".to_string(),
            title: "Important: Alumni Database Update Required".to_string(),
            content: "Dear Alumni, we are updating our database to serve you better. Please log in to your account and verify your information by March 31, 2024. This will help us maintain accurate records and improve our services.".to_string(),
            priority: Priority::High,
            target_audience: "all".to_string(),
            expiry_date: Some("2024-03-31".to_string()),
            attachment: None,
            view_count: 1245,
            status: CircularStatus::Published,
            created_at: "2024-03-01".to_string(),
        },
        Circular {
            id: "2".to_string(),
            title: "New Mentorship Program Launch".to_string(),
            content: "We are excited to announce the launch of our new mentorship program connecting experienced alumni with recent graduates. Sign up now to participate as a mentor or mentee.".to_string(),
            priority: Priority::Medium,
            target_audience: "all".to_string(),
            expiry_date: None,
            attachment: None,
            view_count: 856,
            status: CircularStatus::Published,
            created_at: "2024-02-28".to_string(),
        },
        Circular {
            id: "3".to_string(),
            title: "Campus Infrastructure Development Update".to_string(),
            content: "The new research center construction is progressing well and is expected to be completed by June 2024. Alumni contributions have been instrumental in making this possible.".to_string(),
            priority: Priority::Low,
            target_audience: "all".to_string(),
            expiry_date: None,
            attachment: None,
            view_count: 432,
            status: CircularStatus::Published,
            created_at: "2024-02-25".to_string(),
        },
    ]
}

pub(crate) fn curated_notifications() -> Vec<Notification> {
    vec![
        Notification {
            id: "1".to_string(),
            user_id: "1".to_string(),
            kind: NotificationKind::Job,
            title: "New Job Posted".to_string(),
            message: "A new Software Engineer position at Google matches your profile".to_string(),
            read: false,
            link: Some("/jobs/1".to_string()),
            created_at: "2024-03-10T10:00:00".to_string(),
        },
        Notification {
            id: "2".to_string(),
            user_id: "1".to_string(),
            kind: NotificationKind::Post,
            title: "Post Liked".to_string(),
            message: "Sarah Johnson liked your post".to_string(),
            read: false,
            link: Some("/feed".to_string()),
            created_at: "2024-03-10T09:30:00".to_string(),
        },
        Notification {
            id: "3".to_string(),
            user_id: "1".to_string(),
            kind: NotificationKind::Event,
            title: "Event Reminder".to_string(),
            message: "Annual Alumni Reunion 2024 is coming up in 5 days".to_string(),
            read: true,
            link: Some("/events/1".to_string()),
            created_at: "2024-03-10T08:00:00".to_string(),
        },
        Notification {
            id: "4".to_string(),
            user_id: "1".to_string(),
            kind: NotificationKind::Message,
            title: "New Message".to_string(),
            message: "You have a new message from Emily Williams".to_string(),
            read: true,
            link: Some("/messages".to_string()),
            created_at: "2024-03-09T15:00:00".to_string(),
        },
    ]
}
