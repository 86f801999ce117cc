//! Every operation kind survives serialize then deserialize unchanged.

use dbc_model::{
    AddAttributes, AddProperty, AddService, AddSigOption, AddSynonyms, AddViewAttribute,
    AdditionalAppMenu, AlnValue, AppMenuItem, AttributeDefinition, AttributeProperties,
    AutoSelect, BuilderState, Check, CheckQuery, ColumnValue, Context, CreateApp, CreateAppMenu,
    CreateMaxvar, CreateModule, CreateRelationship, CrossoverField, CrossoverValue, CustomSelect,
    DefineTable, DefineView, DropApp, DropAttributes, DropDomain, DropIndex, DropMaxvar,
    DropModule, DropProperty, DropRelationship, DropService, DropSigOption, DropTable, DropView,
    DropViewAttribute, Freeform, IndexKey, Insert, InsertRow, InsertValue, MaxType, MaxvarType,
    MenuHeader, MenuHeaderItem, MenuOption, MenuSeparator, MenuType, ModifyApp, ModifyAttribute,
    ModifyDomainType, ModifyMaxvar, ModifyModule, ModifyRelationship, ModifyService, ModifyTable,
    ModifyView, ModifyViewAttributes, ModuleApp, ModuleMenuApp, ModuleMenuHeader, ModuleMenuItem,
    NumericValue, OperationKind, ScriptConfig, SearchType, SecureLevel, SequentialIds,
    SetProperty, SpecifyAlnDomain, SpecifyCrossoverDomain, SpecifyIndex, SpecifyNumericDomain,
    SpecifySynonymDomain, SpecifyTableDomain, SqlStatement, SqlTarget, StorageType, SynonymValue,
    TabDisplay, TableType, TableValue, ViewColumn, ViewSelection,
};
use dbc_xml::{deserialize, serialize};

fn s(value: &str) -> String {
    value.to_string()
}

fn some(value: &str) -> Option<String> {
    Some(value.to_string())
}

fn full_properties() -> AttributeProperties {
    AttributeProperties {
        max_type: Some(MaxType::Decimal),
        length: Some(10),
        scale: Some(2),
        persistent: Some(true),
        has_long_desc: Some(false),
        required: Some(true),
        user_defined: Some(true),
        domain: some("RATEDOM"),
        class_name: some("psdi.app.widget.FldRate"),
        default_value: some("0.00"),
        same_as_object: some("ASSET"),
        same_as_attribute: some("RATE"),
        must_be: Some(false),
        is_positive: Some(true),
        auto_key: some("WIDGETNUM"),
        can_auto_num: Some(false),
        search_type: Some(SearchType::Exact),
        localizable: Some(false),
        domain_link: some("RATELINK"),
        restricted: Some(true),
        exclude_tenants: some("T1,T2"),
    }
}

fn column(table: &str, column: &str, view_column: &str) -> ViewColumn {
    ViewColumn {
        table: s(table),
        column: s(column),
        view_column: s(view_column),
        same_storage_as: None,
    }
}

fn kitchen_sink() -> BuilderState {
    let mut config = ScriptConfig::new("ADMIN", "V7612_01")
        .with_description("Widget rollout\nsecond line with <markup> & \"quotes\"")
        .with_context(Context::Tenants);
    config.for_demo_only = Some(false);
    config.tenant_code = some("ACME");

    let mut state = BuilderState::new(config);
    state.checks.push(Check {
        tag: some("WIDGET"),
        group: some("ASSET"),
        key: some("widget.exists"),
        default: some("Widget table already exists"),
        skip_script: Some(true),
        queries: vec![
            CheckQuery::new("select 1 from maxobject where objectname = 'WIDGET'"),
            CheckQuery::new("select 1 from dual where 1 < 2"),
        ],
    });
    state.checks.push(Check::with_query("select 1 from dual"));

    let mut ids = SequentialIds::new();
    let mut push = |operation: dbc_model::Operation| {
        state.push(operation, &mut ids);
    };

    // Table
    push(
        DefineTable {
            object: s("WIDGET"),
            description: s("Widgets"),
            service: s("ASSET"),
            class_name: s("psdi.mbo.custom.CustomMboSet"),
            table_type: TableType::SiteOrg,
            storage_type: Some(StorageType::SystemResource),
            persistent: Some(true),
            primary_key: some("WIDGETNUM,SITEID"),
            main_object: Some(false),
            internal: Some(false),
            trig_root: some("WIDGET"),
            text_direction: some("LTR"),
            attributes: vec![
                AttributeDefinition::new("WIDGETNUM", "Widget", "Identifier")
                    .with_type(MaxType::Upper, 12),
                AttributeDefinition {
                    attribute: s("RATE"),
                    title: s("Rate"),
                    remarks: s("Hourly rate"),
                    properties: full_properties(),
                },
            ],
        }
        .into(),
    );
    push(
        ModifyTable {
            object: s("WIDGET"),
            description: some("Widgets v2"),
            service: some("ASSET"),
            class_name: some("psdi.mbo.custom.CustomMboSet"),
            table_type: Some(TableType::Organization),
            storage_type: Some(StorageType::Tenant),
            primary_key: some("WIDGETNUM"),
            internal: Some(true),
            trig_root: some("WIDGET"),
            text_direction: some("RTL"),
        }
        .into(),
    );
    push(DropTable { object: s("OLDWIDGET") }.into());

    // Attribute
    push(
        AddAttributes {
            object: s("ASSET"),
            attributes: vec![
                AttributeDefinition::new("WIDGETNUM", "Widget", "Linked widget")
                    .with_type(MaxType::Upper, 12),
            ],
        }
        .into(),
    );
    push(
        ModifyAttribute {
            object: s("ASSET"),
            attribute: s("DESCRIPTION"),
            title: some("Description"),
            remarks: None,
            properties: AttributeProperties {
                length: Some(0),
                required: Some(false),
                ..AttributeProperties::default()
            },
        }
        .into(),
    );
    push(
        DropAttributes {
            object: s("ASSET"),
            attributes: vec![s("OLDATTR1"), s("OLDATTR2")],
        }
        .into(),
    );

    // Relationship
    push(
        CreateRelationship {
            parent: s("ASSET"),
            name: s("WIDGET"),
            child: s("WIDGET"),
            where_clause: s("assetnum=:assetnum and siteid=:siteid"),
            remarks: s("Widgets on the asset"),
        }
        .into(),
    );
    push(
        ModifyRelationship {
            parent: s("ASSET"),
            name: s("WIDGET"),
            child: None,
            where_clause: some("assetnum=:assetnum"),
            remarks: None,
        }
        .into(),
    );
    push(
        DropRelationship {
            parent: s("ASSET"),
            name: s("OLDREL"),
        }
        .into(),
    );

    // Domain
    let synonym = SynonymValue {
        value: s("ACTIVE"),
        max_value: s("ACTIVE"),
        defaults: true,
        description: some("Active"),
        site_id: some("BEDFORD"),
        org_id: some("EAGLENA"),
    };
    push(
        SpecifySynonymDomain {
            domain_id: s("WIDGETSTATUS"),
            description: some("Widget status"),
            max_type: MaxType::Upper,
            length: 20,
            overwrite: Some(false),
            internal: Some(true),
            values: vec![
                synonym.clone(),
                SynonymValue {
                    value: s("INACTIVE"),
                    max_value: s("INACTIVE"),
                    defaults: false,
                    ..SynonymValue::default()
                },
            ],
        }
        .into(),
    );
    push(
        AddSynonyms {
            domain_id: s("WIDGETSTATUS"),
            values: vec![synonym],
        }
        .into(),
    );
    push(
        SpecifyAlnDomain {
            domain_id: s("WIDGETCOLOR"),
            description: None,
            max_type: MaxType::Aln,
            length: 8,
            overwrite: Some(true),
            internal: None,
            values: vec![AlnValue {
                value: s("RED"),
                description: some("Red"),
                site_id: None,
                org_id: None,
            }],
        }
        .into(),
    );
    push(
        SpecifyNumericDomain {
            domain_id: s("WIDGETSIZE"),
            description: some("Sizes"),
            max_type: MaxType::Decimal,
            length: 5,
            scale: Some(0),
            overwrite: None,
            internal: None,
            values: vec![NumericValue {
                value: s("1.5"),
                description: some("Small"),
                site_id: None,
                org_id: some("EAGLENA"),
            }],
        }
        .into(),
    );
    push(
        SpecifyCrossoverDomain {
            domain_id: s("WIDGETXOVER"),
            description: some("Copy from item"),
            overwrite: Some(true),
            internal: Some(false),
            values: vec![CrossoverValue {
                object_name: s("ITEM"),
                validation_where_clause: s("itemnum=:itemnum"),
                list_where_clause: some("status='ACTIVE'"),
                error_resource_bundle: some("widget"),
                error_key: some("noitem"),
                site_id: None,
                org_id: None,
                fields: vec![
                    CrossoverField {
                        source_field: s("DESCRIPTION"),
                        dest_field: s("DESCRIPTION"),
                        copy_if_null: Some(true),
                        copy_even_if_src_null: Some(false),
                        copy_only_if_dest_null: Some(true),
                        source_condition: some("1=1"),
                        dest_condition: some("2=2"),
                        sequence: Some(0),
                    },
                    CrossoverField {
                        source_field: s("UNIT"),
                        dest_field: s("ORDERUNIT"),
                        ..CrossoverField::default()
                    },
                ],
            }],
        }
        .into(),
    );
    push(
        SpecifyTableDomain {
            domain_id: s("WIDGETVAL"),
            description: None,
            overwrite: None,
            internal: None,
            values: vec![TableValue {
                object_name: s("WIDGET"),
                validation_where_clause: s("widgetnum=:widgetnum"),
                list_where_clause: None,
                error_resource_bundle: None,
                error_key: None,
                site_id: some("BEDFORD"),
                org_id: None,
            }],
        }
        .into(),
    );
    push(
        ModifyDomainType {
            domain: s("WIDGETCOLOR"),
            max_type: MaxType::Upper,
            length: 10,
            scale: None,
        }
        .into(),
    );
    push(DropDomain { domain_id: s("OLDDOMAIN") }.into());

    // Index
    push(
        SpecifyIndex {
            object: s("WIDGET"),
            name: some("WIDGET_NDX1"),
            primary: Some(false),
            clustered: Some(true),
            unique: Some(true),
            text_search: Some(false),
            required: Some(true),
            keys: vec![
                IndexKey::new("WIDGETNUM"),
                IndexKey {
                    column: s("SITEID"),
                    ascending: Some(false),
                },
            ],
        }
        .into(),
    );
    push(
        DropIndex {
            object: s("WIDGET"),
            name: None,
            keys: vec![IndexKey::new("OLDCOL")],
        }
        .into(),
    );

    // Application
    push(
        CreateApp {
            app: s("WIDGET"),
            description: s("Widgets"),
            main_tbname: some("WIDGET"),
            restrictions: some("status != 'X'"),
            order_by: some("widgetnum"),
            original_app: some("ASSET"),
            is_mobile: Some(false),
        }
        .into(),
    );
    push(
        ModifyApp {
            app: s("WIDGET"),
            description: None,
            main_tbname: None,
            restrictions: some(""),
            order_by: None,
            is_mobile: Some(true),
        }
        .into(),
    );
    push(DropApp { app: s("OLDAPP") }.into());
    let option = MenuOption {
        option: s("STATUS"),
        description: some("Change Status"),
        image: some("status.gif"),
        access_key: some("S"),
        tab_display: Some(TabDisplay::All),
        position: Some(10),
        sub_position: Some(0),
    };
    push(
        CreateAppMenu {
            app: s("WIDGET"),
            menu_type: MenuType::AppMenu,
            items: vec![
                AppMenuItem::Option(option.clone()),
                AppMenuItem::Separator(MenuSeparator {
                    tab_display: Some(TabDisplay::Main),
                    position: Some(20),
                    sub_position: None,
                }),
                AppMenuItem::Header(MenuHeader {
                    header_description: s("More Actions"),
                    image: None,
                    tab_display: Some(TabDisplay::List),
                    position: Some(30),
                    sub_position: None,
                    items: vec![
                        MenuHeaderItem::Option(option.clone()),
                        MenuHeaderItem::Separator(MenuSeparator::default()),
                    ],
                }),
            ],
        }
        .into(),
    );
    push(
        AdditionalAppMenu {
            app: s("WIDGET"),
            menu_type: MenuType::Search,
            items: vec![AppMenuItem::Option(option)],
        }
        .into(),
    );
    push(
        AddSigOption {
            app: s("WIDGET"),
            option_name: s("STATUS"),
            description: s("Change Status"),
            esig_enabled: Some(false),
            visible: Some(true),
            also_grants: some("READ"),
            also_revokes: some("DELETE"),
            prerequisite: some("READ"),
            lang_code: some("EN"),
        }
        .into(),
    );
    push(
        DropSigOption {
            app: s("WIDGET"),
            option_name: s("OLDOPT"),
        }
        .into(),
    );

    // Module
    push(
        CreateModule {
            module: s("WIDGETS"),
            description: s("Widget Management"),
            menu_position: some("ASSET"),
            menu_image: some("modimg_widget.gif"),
            items: vec![
                ModuleMenuItem::App(ModuleMenuApp {
                    app: s("WIDGET"),
                    image: some("appimg_widget.gif"),
                }),
                ModuleMenuItem::Header(ModuleMenuHeader {
                    header_description: s("Setup"),
                    apps: vec![ModuleMenuApp {
                        app: s("WIDGETTYPE"),
                        image: None,
                    }],
                }),
            ],
        }
        .into(),
    );
    push(
        ModifyModule {
            module: s("WIDGETS"),
            description: some("Widgets"),
            menu_position: None,
            menu_image: None,
        }
        .into(),
    );
    push(DropModule { module: s("OLDMOD") }.into());
    push(
        ModuleApp {
            module: s("WIDGETS"),
            app: s("WIDGETTYPE"),
            menu_position: some("WIDGET"),
            menu_image: None,
        }
        .into(),
    );

    // View
    push(
        DefineView {
            name: s("WIDGETVIEW"),
            description: s("Widgets with type"),
            service: s("ASSET"),
            class_name: s("psdi.mbo.custom.CustomMboSet"),
            extends: some("WIDGET"),
            table_type: Some(TableType::Site),
            main_object: Some(true),
            internal: Some(false),
            selection: ViewSelection::AutoSelect(AutoSelect {
                tables: vec![s("WIDGET"), s("WIDGETTYPE")],
                columns: vec![column("WIDGETTYPE", "DESCRIPTION", "TYPEDESC")],
            }),
        }
        .into(),
    );
    push(
        DefineView {
            name: s("WIDGETSUM"),
            description: s("Widget totals"),
            service: s("ASSET"),
            class_name: s("psdi.mbo.custom.CustomMboSet"),
            extends: None,
            table_type: None,
            main_object: None,
            internal: None,
            selection: ViewSelection::Custom(CustomSelect {
                select: s("select siteid, count(*) as total"),
                from: s("widget"),
                where_clause: some("qty > 0 and status <> 'X'"),
                columns: vec![ViewColumn {
                    same_storage_as: some("WIDGET.QTY"),
                    ..column("WIDGET", "QTY", "TOTAL")
                }],
            }),
        }
        .into(),
    );
    push(
        ModifyView {
            name: s("WIDGETSUM"),
            description: some("Totals"),
            service: None,
            class_name: None,
            table_type: Some(TableType::System),
            select: None,
            from: some("widget w"),
            where_clause: some(""),
        }
        .into(),
    );
    push(DropView { name: s("OLDVIEW") }.into());
    push(
        AddViewAttribute {
            view: s("WIDGETVIEW"),
            attribute: s("QTY"),
            table: s("WIDGET"),
            view_column: some("WQTY"),
            same_storage_as: some("WIDGET.QTY"),
        }
        .into(),
    );
    push(
        DropViewAttribute {
            view: s("WIDGETVIEW"),
            attribute: s("OLDCOL"),
        }
        .into(),
    );
    push(
        ModifyViewAttributes {
            view: s("WIDGETVIEW"),
            columns: vec![
                column("WIDGET", "WIDGETNUM", "WIDGETNUM"),
                column("WIDGET", "SITEID", "SITEID"),
            ],
        }
        .into(),
    );

    // Service
    push(
        AddService {
            service_name: s("WIDGET"),
            description: s("Widget service"),
            class_name: s("psdi.app.widget.WidgetService"),
            singleton: Some(true),
        }
        .into(),
    );
    push(
        ModifyService {
            service_name: s("WIDGET"),
            description: None,
            class_name: some("psdi.app.widget.WidgetService2"),
            singleton: None,
        }
        .into(),
    );
    push(DropService { service_name: s("OLDSVC") }.into());

    // Property
    push(
        AddProperty {
            name: s("mxe.widget.enabled"),
            description: s("Enables widgets"),
            max_type: MaxType::Yorn,
            secure_level: SecureLevel::MaxOnly,
            default_value: some("0"),
            domain_id: some("YORN"),
            value: some("1"),
            live_refresh: Some(true),
            required: Some(false),
            online_changes: Some(true),
            user_defined: Some(true),
            encrypted: Some(false),
            masked: Some(false),
            global_only: Some(true),
            instance_only: Some(false),
        }
        .into(),
    );
    push(
        SetProperty {
            name: s("mxe.widget.enabled"),
            value: s("1"),
        }
        .into(),
    );
    push(DropProperty { name: s("mxe.old") }.into());

    // Maxvar
    push(
        CreateMaxvar {
            name: s("WIDGETSTART"),
            description: s("First widget number"),
            maxvar_type: MaxvarType::InsertSite,
            default: some("1000"),
        }
        .into(),
    );
    push(
        ModifyMaxvar {
            name: s("WIDGETSTART"),
            description: None,
            maxvar_type: Some(MaxvarType::Site),
            default: None,
        }
        .into(),
    );
    push(DropMaxvar { name: s("OLDVAR") }.into());

    // Data
    push(
        Insert {
            table: s("WIDGETTYPE"),
            ignore_duplicates: Some(false),
            rows: vec![
                InsertRow {
                    values: vec![
                        ColumnValue::new("TYPE", InsertValue::String(s("PUMP"))),
                        ColumnValue::new("ACTIVE", InsertValue::Boolean(true)),
                        ColumnValue::new("SEQ", InsertValue::Number(s("007"))),
                        ColumnValue::new("DESCRIPTION", InsertValue::FromColumn(s("TYPE"))),
                    ],
                },
                InsertRow {
                    values: vec![ColumnValue::new("TYPE", InsertValue::String(String::new()))],
                },
            ],
        }
        .into(),
    );
    push(
        Freeform {
            description: s("Backfill quantities"),
            statements: vec![
                SqlStatement::new(SqlTarget::Oracle, "update widget set qty = nvl(qty, 0)"),
                SqlStatement::new(SqlTarget::SqlServer, "update widget set qty = isnull(qty, 0)"),
                SqlStatement::new(SqlTarget::NotDb2, "delete from widget where qty < 0 && 1=1"),
            ],
        }
        .into(),
    );

    state
}

#[test]
fn test_kitchen_sink_covers_every_kind() {
    let state = kitchen_sink();
    for kind in OperationKind::ALL {
        assert!(
            state.operations().any(|operation| operation.kind() == kind),
            "missing {kind}"
        );
    }
}

#[test]
fn test_deserialize_reproduces_state() {
    let state = kitchen_sink();
    let text = serialize(&state);
    assert_eq!(deserialize(&text), state);
}

#[test]
fn test_serialization_is_a_fixed_point() {
    let text = serialize(&kitchen_sink());
    assert_eq!(serialize(&deserialize(&text)), text);
}
