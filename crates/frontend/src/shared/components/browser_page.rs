use std::collections::BTreeMap;
use std::rc::Rc;

use browser::{
    BrowserConfig, ColumnDef, ColumnVisibility, ResourceBrowser, ViewMode, ViewModeSwitch,
};
use contracts::{FacetOption, ResourceRecord};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::components::column_menu::ColumnMenu;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchBox;
use crate::shared::confirm::WindowConfirm;
use crate::shared::icons::icon;
use crate::shared::notices::NoticeHub;
use crate::shared::rest_store::{fetch_facet_options, RestStore};

/// What the embedded form receives from the view-mode switch.
///
/// While `read_only` is set the form must not invoke any field-mutation
/// callback; the switch enforces this contract by handing out the flag, the
/// form honors it by disabling its inputs and hiding save.
#[derive(Clone)]
pub struct FormContext<R> {
    pub record: Option<R>,
    pub read_only: bool,
    pub on_saved: Callback<()>,
    pub on_cancel: Callback<()>,
}

/// Copyable bundle of handles the list view closures capture.
struct ListUi<R: 'static> {
    title: &'static str,
    browser: StoredValue<Rc<ResourceBrowser<R>>, LocalStorage>,
    columns_vis: StoredValue<Rc<ColumnVisibility>, LocalStorage>,
    mode: StoredValue<Rc<ViewModeSwitch<R>>, LocalStorage>,
    config: StoredValue<BrowserConfig>,
    version: RwSignal<usize>,
    facet_options: RwSignal<BTreeMap<String, Vec<FacetOption>>>,
    cell: fn(&ColumnDef, &R) -> String,
}

impl<R: 'static> Clone for ListUi<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: 'static> Copy for ListUi<R> {}

/// One generic screen: search, facet filters, archived toggle, column menu,
/// paginated table with row actions, and the list ↔ form switch. Screens
/// differ only by their [`BrowserConfig`], record type, cell renderer and
/// form.
#[component]
#[allow(non_snake_case)]
pub fn BrowserPage<R>(
    config: BrowserConfig,
    title: &'static str,
    /// Renders one record's value for one column.
    cell: fn(&ColumnDef, &R) -> String,
    /// Renders the Create/Edit/View form for this resource.
    form: fn(FormContext<R>) -> AnyView,
) -> impl IntoView
where
    R: ResourceRecord + DeserializeOwned + Clone + PartialEq + Send + Sync + 'static,
{
    let notices = use_context::<NoticeHub>().expect("NoticeHub not found in context");

    // Data/columns changes and mode changes drive separate re-renders so
    // that typing in the search box never rebuilds the input under the
    // user's cursor.
    let version = RwSignal::new(0usize);
    let mode_version = RwSignal::new(0usize);

    let store = Rc::new(RestStore::<R>::new(&config));
    let browser = Rc::new(ResourceBrowser::new(
        config.clone(),
        store,
        Rc::new(notices.clone()),
        Rc::new(WindowConfirm),
    ));
    browser.set_on_change(move || version.update(|v| *v += 1));

    let columns_vis = Rc::new(ColumnVisibility::new(config.column_keys()));
    columns_vis.set_on_change(move || version.update(|v| *v += 1));

    let mode = Rc::new(ViewModeSwitch::<R>::new());
    mode.set_on_change(move || mode_version.update(|v| *v += 1));

    let facet_options = RwSignal::new(BTreeMap::<String, Vec<FacetOption>>::new());
    for facet in config.facets.clone() {
        spawn_local(async move {
            match fetch_facet_options(&facet.source).await {
                Ok(options) => facet_options.update(|map| {
                    map.insert(facet.key.to_string(), options);
                }),
                Err(err) => log::warn!("failed to load {} facet options: {err}", facet.key),
            }
        });
    }

    {
        let browser = browser.clone();
        spawn_local(async move { browser.reload().await });
    }

    let ui = ListUi {
        title,
        browser: StoredValue::new_local(browser),
        columns_vis: StoredValue::new_local(columns_vis),
        mode: StoredValue::new_local(mode),
        config: StoredValue::new(config),
        version,
        facet_options,
        cell,
    };

    let on_saved = Callback::new(move |_: ()| {
        ui.mode.with_value(|m| m.saved());
        let browser = ui.browser.get_value();
        spawn_local(async move { browser.reload().await });
    });
    let on_cancel = Callback::new(move |_: ()| ui.mode.with_value(|m| m.cancel()));

    view! {
        <div style="padding: 20px;">
            {move || {
                mode_version.get();
                match ui.mode.get_value().current() {
                    ViewMode::List => render_list(ui).into_any(),
                    ViewMode::Create => form(FormContext {
                        record: None,
                        read_only: false,
                        on_saved,
                        on_cancel,
                    }),
                    ViewMode::Edit(record) => form(FormContext {
                        record: Some(record),
                        read_only: false,
                        on_saved,
                        on_cancel,
                    }),
                    ViewMode::View(record) => form(FormContext {
                        record: Some(record),
                        read_only: true,
                        on_saved,
                        on_cancel,
                    }),
                }
            }}
        </div>
    }
}

fn render_list<R>(ui: ListUi<R>) -> impl IntoView
where
    R: ResourceRecord + Clone + PartialEq + Send + Sync + 'static,
{
    let version = ui.version;
    let config = ui.config.get_value();
    let search_term = ui.browser.get_value().query().search_term;

    let current_page = Signal::derive(move || {
        version.get();
        ui.browser.get_value().query().page
    });
    let total_pages = Signal::derive(move || {
        version.get();
        ui.browser.get_value().total_pages()
    });
    let on_page_change = Callback::new(move |page: u32| {
        let browser = ui.browser.get_value();
        spawn_local(async move { browser.go_to_page(page).await });
    });
    let on_search = Callback::new(move |term: String| {
        let browser = ui.browser.get_value();
        spawn_local(async move {
            browser.set_search_term(&term);
            browser.submit_search().await;
        });
    });

    let facet_selects = config
        .facets
        .iter()
        .cloned()
        .map(|facet| {
            let key = facet.key;
            let debounce_ms = config.facet_debounce_ms;
            let epoch = StoredValue::new(0u64);
            let options = ui.facet_options;
            view! {
                <label style="display: inline-flex; gap: 6px; align-items: center;">
                    <span style="color: #555;">{facet.label}</span>
                    <select
                        style="padding: 6px 8px; border: 1px solid #ddd; border-radius: 4px;"
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            let issue = epoch.get_value() + 1;
                            epoch.set_value(issue);
                            let browser = ui.browser.get_value();
                            spawn_local(async move {
                                if debounce_ms > 0 {
                                    TimeoutFuture::new(debounce_ms).await;
                                    if epoch.get_value() != issue {
                                        return;
                                    }
                                }
                                browser.set_facet(key, &value).await;
                            });
                        }
                    >
                        <option
                            value=""
                            selected=move || {
                                version.get();
                                ui.browser.get_value().query().facet(key).is_none()
                            }
                        >
                            "All"
                        </option>
                        {move || {
                            options
                                .get()
                                .get(key)
                                .cloned()
                                .unwrap_or_default()
                                .into_iter()
                                .map(|opt| {
                                    let value = opt.id.clone();
                                    let selected_id = opt.id;
                                    view! {
                                        <option
                                            value=value
                                            selected=move || {
                                                version.get();
                                                ui.browser.get_value().query().facet(key)
                                                    == Some(selected_id.as_str())
                                            }
                                        >
                                            {opt.name}
                                        </option>
                                    }
                                })
                                .collect_view()
                        }}
                    </select>
                </label>
            }
        })
        .collect_view();

    view! {
        <div>
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                <h1 style="font-size: 24px; font-weight: bold;">{ui.title}</h1>
                <Space>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| ui.mode.with_value(|m| m.open_create())
                    >
                        {icon("plus")}
                        " New"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| {
                            let browser = ui.browser.get_value();
                            spawn_local(async move { browser.reload().await });
                        }
                    >
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                </Space>
            </Flex>

            <div style="margin: 16px 0; display: flex; gap: 12px; align-items: center; flex-wrap: wrap;">
                <SearchBox initial=search_term on_submit=on_search placeholder="Search..." />
                {facet_selects}
                <div style="margin-left: auto; display: flex; gap: 8px; align-items: center;">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| {
                            let browser = ui.browser.get_value();
                            spawn_local(async move { browser.toggle_archived_view().await });
                        }
                    >
                        {icon("archive")}
                        {move || {
                            version.get();
                            if ui.browser.get_value().showing_archived() {
                                " Show active"
                            } else {
                                " Show archived"
                            }
                        }}
                    </Button>
                    <ColumnMenu
                        columns=config.columns.clone()
                        registry=ui.columns_vis
                        version=version
                    />
                </div>
            </div>

            {move || {
                version.get();
                let browser = ui.browser.get_value();
                let config = ui.config.get_value();
                let columns_vis = ui.columns_vis.get_value();
                let cell = ui.cell;

                if browser.is_loading() {
                    return view! {
                        <div style="text-align: center; padding: 40px; color: #666;">"Loading\u{2026}"</div>
                    }
                    .into_any();
                }

                let records = browser.records();
                if records.is_empty() {
                    return view! {
                        <div style="text-align: center; padding: 32px; color: #666;">"No records found"</div>
                    }
                    .into_any();
                }

                let visible: Vec<ColumnDef> = config
                    .columns
                    .iter()
                    .filter(|col| columns_vis.is_visible(col.key))
                    .cloned()
                    .collect();
                let archived_view = browser.showing_archived();

                let header_cells = visible
                    .iter()
                    .map(|col| {
                        let label = col.label;
                        view! { <TableHeaderCell>{label}</TableHeaderCell> }
                    })
                    .collect_view();

                let rows = records
                    .into_iter()
                    .map(|record| {
                        let cells = visible
                            .iter()
                            .map(|col| {
                                let value = cell(col, &record);
                                view! {
                                    <TableCell>
                                        <TableCellLayout truncate=true>{value}</TableCellLayout>
                                    </TableCell>
                                }
                            })
                            .collect_view();
                        let view_record = record.clone();
                        let edit_record = record.clone();
                        let lifecycle_record = record.clone();
                        let delete_record = record;
                        let lifecycle_button = if archived_view {
                            view! {
                                <button
                                    class="row-action"
                                    title="Unarchive"
                                    on:click=move |_| {
                                        let browser = ui.browser.get_value();
                                        let record = lifecycle_record.clone();
                                        spawn_local(async move { browser.unarchive(&record).await });
                                    }
                                >
                                    {icon("archive")}
                                </button>
                            }
                            .into_any()
                        } else {
                            view! {
                                <button
                                    class="row-action"
                                    title="Archive"
                                    on:click=move |_| {
                                        let browser = ui.browser.get_value();
                                        let record = lifecycle_record.clone();
                                        spawn_local(async move { browser.archive(&record).await });
                                    }
                                >
                                    {icon("archive")}
                                </button>
                            }
                            .into_any()
                        };
                        view! {
                            <TableRow>
                                {cells}
                                <TableCell>
                                    <div style="display: flex; gap: 4px; justify-content: flex-end;">
                                        <button
                                            class="row-action"
                                            title="View"
                                            on:click=move |_| ui.mode.with_value(|m| m.open_view(view_record.clone()))
                                        >
                                            {icon("eye")}
                                        </button>
                                        <button
                                            class="row-action"
                                            title="Edit"
                                            on:click=move |_| ui.mode.with_value(|m| m.open_edit(edit_record.clone()))
                                        >
                                            {icon("edit")}
                                        </button>
                                        {lifecycle_button}
                                        <button
                                            class="row-action"
                                            title="Delete"
                                            on:click=move |_| {
                                                let browser = ui.browser.get_value();
                                                let record = delete_record.clone();
                                                spawn_local(async move { browser.delete(&record).await });
                                            }
                                        >
                                            {icon("delete")}
                                        </button>
                                    </div>
                                </TableCell>
                            </TableRow>
                        }
                    })
                    .collect_view();

                view! {
                    <Table>
                        <TableHeader>
                            <TableRow>
                                {header_cells}
                                <TableHeaderCell>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>{rows}</TableBody>
                    </Table>
                }
                .into_any()
            }}

            {move || {
                version.get();
                (ui.browser.get_value().total_pages() > 1).then(|| view! {
                    <div style="margin-top: 16px;">
                        <PaginationControls
                            current_page=current_page
                            total_pages=total_pages
                            on_page_change=on_page_change
                        />
                    </div>
                })
            }}
        </div>
    }
}
