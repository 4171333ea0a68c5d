//! The `/user` dashboard: profile, tasks, and the admin user panel.

use std::rc::Rc;

use dioxus::prelude::*;
use store::Session;
use ui::components::{AddTaskDialog, AddUserDialog, ProfileCard, TaskList, UserList};
use ui::render::{ProfileView, TaskListView, UserRow};
use ui::{use_services, DashboardController, NewTaskForm, NewUserForm, PlatformStore, WebBrowser};

type Controller = DashboardController<api::HttpClient, PlatformStore, WebBrowser>;

/// Resolves the session before anything is fetched; without one the
/// controller has already sent the browser back to the login page.
#[component]
pub fn Dashboard() -> Element {
    let services = use_services();
    let session = use_hook(move || services.dashboard().enter());

    match session {
        Some(session) => rsx! { DashboardPage { session } },
        None => rsx! {},
    }
}

struct PageContext {
    dashboard: Controller,
    session: Session,
}

#[component]
fn DashboardPage(session: Session) -> Element {
    let services = use_services();
    let ctx = use_hook(|| {
        Rc::new(PageContext {
            dashboard: services.dashboard(),
            session: session.clone(),
        })
    });

    let mut tasks = use_signal(TaskListView::default);
    let mut users = use_signal(Vec::<UserRow>::new);
    let mut add_user_open = use_signal(|| false);
    let mut add_task_open = use_signal(|| false);
    let mut new_user = use_signal(NewUserForm::default);
    let mut new_task = use_signal(NewTaskForm::default);

    let is_admin = session.is_admin;
    let profile = ProfileView::from_session(&session);

    // Both lists load independently; whichever answers first renders first.
    let _tasks_loader = use_resource({
        let ctx = ctx.clone();
        move || {
            let ctx = ctx.clone();
            async move {
                if let Some(view) = ctx.dashboard.load_tasks(&ctx.session).await {
                    tasks.set(view);
                }
            }
        }
    });
    let _users_loader = use_resource({
        let ctx = ctx.clone();
        move || {
            let ctx = ctx.clone();
            async move {
                if let Some(rows) = ctx.dashboard.load_users(&ctx.session).await {
                    users.set(rows);
                }
            }
        }
    });

    let on_toggle_role = {
        let ctx = ctx.clone();
        move |row: UserRow| {
            let ctx = ctx.clone();
            spawn(async move {
                let outcome = ctx.dashboard.toggle_role(&ctx.session, &row).await;
                if let Some(rows) = outcome.refreshed() {
                    users.set(rows);
                }
            });
        }
    };

    let on_reset_password = {
        let ctx = ctx.clone();
        move |username: String| {
            let ctx = ctx.clone();
            spawn(async move {
                let outcome = ctx.dashboard.reset_password(&ctx.session, &username).await;
                if let Some(rows) = outcome.refreshed() {
                    users.set(rows);
                }
            });
        }
    };

    let on_delete = {
        let ctx = ctx.clone();
        move |username: String| {
            let ctx = ctx.clone();
            spawn(async move {
                let outcome = ctx.dashboard.delete_user(&ctx.session, &username).await;
                if let Some(rows) = outcome.refreshed() {
                    users.set(rows);
                }
            });
        }
    };

    let on_add_user = {
        let ctx = ctx.clone();
        move |form: NewUserForm| {
            let ctx = ctx.clone();
            spawn(async move {
                let outcome = ctx.dashboard.add_user(&ctx.session, &form).await;
                if outcome.is_applied() {
                    add_user_open.set(false);
                    new_user.set(NewUserForm::default());
                }
                if let Some(rows) = outcome.refreshed() {
                    users.set(rows);
                }
            });
        }
    };

    let on_add_task = {
        let ctx = ctx.clone();
        move |form: NewTaskForm| {
            let ctx = ctx.clone();
            spawn(async move {
                let outcome = ctx.dashboard.add_task(&ctx.session, &form).await;
                if outcome.is_applied() {
                    add_task_open.set(false);
                    new_task.set(NewTaskForm::default());
                }
                if let Some(view) = outcome.refreshed() {
                    tasks.set(view);
                }
            });
        }
    };

    let on_logout = {
        let ctx = ctx.clone();
        move |_: MouseEvent| ctx.dashboard.logout()
    };

    let handle_keydown = move |evt: KeyboardEvent| {
        if evt.key() == Key::Escape {
            add_user_open.set(false);
            add_task_open.set(false);
        }
    };

    rsx! {
        div { class: "page dashboard", tabindex: "-1", onkeydown: handle_keydown,
            header { class: "dashboard-header",
                h1 { "Dashboard" }
                button { class: "secondary", onclick: on_logout, "Logout" }
            }

            ProfileCard { profile }

            section { class: "card",
                div { class: "section-header",
                    h2 { "Tasks" }
                    button { class: "primary", onclick: move |_| add_task_open.set(true), "Add Task" }
                }
                TaskList { view: tasks() }
            }

            if is_admin {
                section { class: "card",
                    div { class: "section-header",
                        h2 { "Users" }
                        button { class: "primary", onclick: move |_| add_user_open.set(true), "Add User" }
                    }
                    UserList {
                        rows: users(),
                        on_toggle_role,
                        on_reset_password,
                        on_delete,
                    }
                }

                AddUserDialog {
                    open: add_user_open(),
                    form: new_user,
                    on_submit: on_add_user,
                    on_close: move |_| add_user_open.set(false),
                }
            }

            AddTaskDialog {
                open: add_task_open(),
                show_shared: is_admin,
                form: new_task,
                on_submit: on_add_task,
                on_close: move |_| add_task_open.set(false),
            }
        }
    }
}
