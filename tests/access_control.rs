//! Department gate enforcement over live HTTP.

use serde_json::Value;

mod common;

const SUPERUSER: &str = "x-user-superuser";
const DEPARTMENTS: &str = "x-user-departments";

#[tokio::test]
async fn gate_enforces_department_membership() {
    let backend_addr = common::start_mock_upstream("ok").await;
    let mut config = common::gateway_config(backend_addr);
    config.access.enforce = true;
    let (proxy_addr, shutdown) = common::spawn_gateway(config).await;

    let client = common::test_client();
    let base = format!("http://{}", proxy_addr);

    // Superuser passes everywhere, including user management.
    let res = client
        .get(format!("{base}/api/v1/users/7"))
        .header(SUPERUSER, "true")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);

    // Member of inventory+reports: inventory allowed.
    let res = client
        .get(format!("{base}/api/v1/inventory/5"))
        .header(DEPARTMENTS, "inventory,reports")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(res.text().await.unwrap(), "ok");

    // Same user: orders denied with the documented body.
    let res = client
        .get(format!("{base}/api/v1/orders/123"))
        .header(DEPARTMENTS, "inventory,reports")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 403);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["detail"], "Department access denied");

    // User management is superuser-only even when listed.
    let res = client
        .get(format!("{base}/api/v1/users"))
        .header(DEPARTMENTS, "user_management")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 403);

    // No identity headers on a mapped route: denied.
    let res = client
        .get(format!("{base}/api/v1/orders"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 403);

    // Unmapped route defaults to allow, even without identity.
    let res = client
        .get(format!("{base}/api/v1/colors"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);

    shutdown.trigger();
}

#[tokio::test]
async fn gate_is_passthrough_when_disabled() {
    let backend_addr = common::start_mock_upstream("ok").await;
    // Default config: enforcement off.
    let config = common::gateway_config(backend_addr);
    let (proxy_addr, shutdown) = common::spawn_gateway(config).await;

    let client = common::test_client();
    let res = client
        .get(format!("http://{}/api/v1/orders/123", proxy_addr))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);

    shutdown.trigger();
}
