use alumnexus_core::data::{alumni_data, jobs_data, notifications_data, posts_data};
use alumnexus_core::{Alumni, Job, Notification, Post, User, UserRole};

#[test]
fn alumni_serializes_with_portal_wire_names() {
    let alumni = alumni_data();
    let json = serde_json::to_value(&alumni[0]).unwrap();

    assert_eq!(json["id"], "1");
    assert_eq!(json["rollNumber"], "CS2020001");
    assert_eq!(json["graduationYear"], "2020");
    assert_eq!(json["isVerified"], true);
    assert_eq!(json["status"], "verified");
    assert_eq!(json["registrationDate"], "2024-01-15");
    assert_eq!(json["experience"][0]["startDate"], "2022-06");
    assert_eq!(json["experience"][0]["current"], true);

    let decoded: Alumni = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, alumni[0]);
}

#[test]
fn job_type_uses_kebab_case_wire_values() {
    let jobs = jobs_data();
    let full_time = serde_json::to_value(&jobs[0]).unwrap();
    assert_eq!(full_time["type"], "full-time");
    assert_eq!(full_time["postedBy"], "admin");
    assert_eq!(full_time["applicationsCount"], 42);
    assert_eq!(full_time["status"], "active");

    let internship = serde_json::to_value(&jobs[3]).unwrap();
    assert_eq!(internship["type"], "internship");

    let decoded: Job = serde_json::from_value(full_time).unwrap();
    assert_eq!(decoded, jobs[0]);
}

#[test]
fn post_carries_denormalized_author_fields_on_the_wire() {
    let posts = posts_data();
    let json = serde_json::to_value(&posts[0]).unwrap();

    assert_eq!(json["userId"], "1");
    assert_eq!(json["userName"], "John Smith");
    assert_eq!(json["userCompany"], "Google");
    assert_eq!(json["visibility"], "public");
    assert_eq!(json["likes"][0], "2");
    assert_eq!(json["comments"][0]["userName"], "Sarah Johnson");

    let decoded: Post = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, posts[0]);
}

#[test]
fn notification_kind_serializes_as_type() {
    let notifications = notifications_data();
    let json = serde_json::to_value(&notifications[0]).unwrap();
    assert_eq!(json["type"], "job");
    assert_eq!(json["read"], false);
    assert_eq!(json["link"], "/jobs/1");

    let decoded: Notification = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, notifications[0]);
}

#[test]
fn user_role_uses_snake_case_wire_values() {
    let user = User::new("1", "admin@alumnexus.com", "Admin User", UserRole::Admin, "2024-01-01");
    let json = serde_json::to_value(&user).unwrap();
    assert_eq!(json["role"], "admin");
    assert_eq!(json["createdAt"], "2024-01-01");

    let decoded: User = serde_json::from_value(json).unwrap();
    assert_eq!(decoded.role, UserRole::Admin);
}
