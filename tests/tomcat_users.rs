use fs_tables::{credentials, credentials_from_path, CredentialPair, Error};

fn pair(username: &str, password: &str) -> CredentialPair {
    CredentialPair {
        username: username.to_string(),
        password: password.to_string(),
    }
}

#[test]
fn credentials_come_back_in_document_order() {
    let xml = r#"<tomcat-users>
        <user username="a" password="b"/>
        <user username="c" password="d"/>
    </tomcat-users>"#;

    let pairs = credentials(xml).expect("parse");
    assert_eq!(pairs, vec![pair("a", "b"), pair("c", "d")]);
}

#[test]
fn non_user_children_are_ignored() {
    let xml = r#"<tomcat-users>
        <role rolename="manager"/>
        <user username="admin" password="hunter2" roles="manager"/>
        <!-- commented out operator account -->
    </tomcat-users>"#;

    let pairs = credentials(xml).expect("parse");
    assert_eq!(pairs, vec![pair("admin", "hunter2")]);
}

#[test]
fn empty_user_list_is_a_success() {
    let pairs = credentials("<tomcat-users></tomcat-users>").expect("parse");
    assert!(pairs.is_empty());
}

#[test]
fn missing_password_fails_with_no_partial_list() {
    // The first user is well-formed; the failure on the second must still
    // suppress the whole result.
    let xml = r#"<tomcat-users>
        <user username="a" password="b"/>
        <user username="c"/>
    </tomcat-users>"#;

    match credentials(xml) {
        Err(Error::Parse(message)) => assert!(
            message.contains("password"),
            "diagnostic should name the missing attribute: {message}"
        ),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn missing_username_fails_with_parse_error() {
    let xml = r#"<tomcat-users><user password="b"/></tomcat-users>"#;
    match credentials(xml) {
        Err(Error::Parse(message)) => assert!(message.contains("username")),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn unterminated_document_fails_with_parse_error() {
    match credentials(r#"<tomcat-users><user username="a" password="b">"#) {
        Err(Error::Parse(_)) => {}
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn wrong_root_element_fails_with_parse_error() {
    match credentials(r#"<users><user username="a" password="b"/></users>"#) {
        Err(Error::Parse(message)) => assert!(message.contains("tomcat-users")),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn from_path_round_trips_through_the_filesystem() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("tomcat-users.xml");
    std::fs::write(
        &path,
        r#"<tomcat-users><user username="a" password="b"/></tomcat-users>"#,
    )
    .expect("write");

    let pairs = credentials_from_path(&path).expect("parse");
    assert_eq!(pairs, vec![pair("a", "b")]);
}

#[test]
fn from_path_propagates_missing_file_unchanged() {
    let dir = tempfile::tempdir().expect("tempdir");
    match credentials_from_path(dir.path().join("missing.xml")) {
        Err(Error::NotFound(_)) => {}
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn from_path_treats_non_utf8_content_as_parse_failure() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("garbage.xml");
    std::fs::write(&path, [0xff, 0xfe, 0x00, 0x80]).expect("write");

    match credentials_from_path(&path) {
        Err(Error::Parse(_)) => {}
        other => panic!("unexpected result: {other:?}"),
    }
}
